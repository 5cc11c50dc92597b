//! UI rendering

mod board_view;
mod help_view;
mod result_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Screen regions of the board tab
pub struct Panes {
    pub tabs: Rect,
    pub ships: Rect,
    pub zones: Rect,
    pub board: Rect,
    pub results: Rect,
    pub log: Rect,
    pub keys: Rect,
}

pub fn panes(area: Rect, ship_count: usize) -> Panes {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24),
            Constraint::Min(40),
            Constraint::Length(44),
        ])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ship_count as u16 + 2),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(columns[2]);

    Panes {
        tabs: rows[0],
        ships: left[0],
        zones: left[1],
        board: columns[1],
        results: right[0],
        log: right[1],
        keys: rows[2],
    }
}

/// Canvas area inside the board's border
pub fn board_inner(area: Rect, ship_count: usize) -> Rect {
    Block::default().borders(Borders::ALL).inner(panes(area, ship_count).board)
}

pub fn draw(f: &mut Frame, app: &App) {
    let panes = panes(f.area(), app.ships.len());

    draw_tabs(f, app, panes.tabs);

    match app.current_tab {
        Tab::Board => {
            board_view::draw_ships(f, app, panes.ships);
            board_view::draw_zones(f, app, panes.zones);
            board_view::draw_board(f, app, panes.board);
            result_view::draw(f, app, panes.results);
            result_view::draw_log(f, app, panes.log);
        }
        Tab::Help => {
            let content = Rect {
                height: panes.keys.y - panes.ships.y,
                width: f.area().width,
                x: f.area().x,
                y: panes.ships.y,
            };
            help_view::draw(f, app, content);
        }
    }

    draw_keybindings(f, app, panes.keys);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("?", "Help"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Board => vec![
            ("Tab", "Ships/Zones"),
            ("↑/↓", "Select"),
            ("Enter/Click", "Roll"),
            ("r", "Re-roll"),
        ],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::White)));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let title = match app.board() {
        Some(board) => format!(" Maneuver Board: {} ", board.ship),
        None => " Maneuver Board ".to_string(),
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}
