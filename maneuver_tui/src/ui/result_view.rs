//! Maneuver results and the log panel

use crate::app::App;
use maneuver_core::ManeuverCard;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            format!("⚠ {}", status),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    match app.last_result() {
        Some(outcome) => {
            let view = &outcome.view;
            lines.push(Line::from(Span::styled(
                view.zone_line.clone(),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(Span::styled(
                view.roll_line.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));

            for block in &view.blocks {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("── {} ──", block.heading),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
                card_lines(app, &block.card, Color::White, &mut lines);

                if let Some(heading) = &block.swerve_heading {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", heading),
                        Style::default().fg(Color::Magenta),
                    )));
                    for swerve in &block.swerves {
                        card_lines(app, swerve, Color::Gray, &mut lines);
                    }
                }
            }
        }
        None => lines.push(Line::from(Span::styled(
            "Click a zone to roll",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Maneuvers "));

    f.render_widget(paragraph, area);
}

fn card_lines(app: &App, card: &ManeuverCard, color: Color, lines: &mut Vec<Line<'static>>) {
    lines.push(Line::from(Span::styled(
        format!("  ▶ {}", card.text),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    let icons: Vec<Span<'static>> = card
        .icons()
        .iter()
        .map(|path| {
            let style = if app.asset_exists(path) {
                Style::default().fg(Color::Blue)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!("    {}", path), style)
        })
        .collect();
    for icon in icons {
        lines.push(Line::from(icon));
    }
}

pub fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .logs
        .tail(area.height.saturating_sub(2) as usize)
        .into_iter()
        .map(|line| {
            let style = if line.starts_with("[ERROR]") {
                Style::default().fg(Color::Red)
            } else if line.starts_with("[WARN]") {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Span::styled(line, style))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Log "));
    f.render_widget(list, area);
}
