//! Ship selector, zone list and the board canvas

use crate::app::{App, Focus};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, List, ListItem, Paragraph,
    },
    Frame,
};

fn focus_border(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn draw_ships(f: &mut Frame, app: &App, area: Rect) {
    let current = app.board().map(|b| b.ship.as_str());
    let items: Vec<ListItem> = app
        .ships
        .iter()
        .enumerate()
        .map(|(i, ship)| {
            let active = current == Some(ship.id.to_lowercase().as_str());
            let marker = if active { "● " } else { "  " };
            let mut style = Style::default().fg(if active { Color::Green } else { Color::White });
            if i == app.selected_ship && app.focus == Focus::Ships {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(" "),
                Span::styled(format!("{}{}", marker, ship.display_name()), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(app, Focus::Ships))
            .title(" Ships "),
    );
    f.render_widget(list, area);
}

pub fn draw_zones(f: &mut Frame, app: &App, area: Rect) {
    let clicked = app.last_result().map(|o| o.resolution.zone.as_str());
    let visible = area.height.saturating_sub(2) as usize;
    let skip = app.selected_zone.saturating_sub(visible.saturating_sub(1));

    let items: Vec<ListItem> = app
        .zone_names()
        .into_iter()
        .enumerate()
        .skip(skip)
        .map(|(i, zone)| {
            let mut style = if clicked == Some(zone) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            if i == app.selected_zone && app.focus == Focus::Zones {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Span::styled(zone.to_string(), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(app, Focus::Zones))
            .title(" Zones "),
    );
    f.render_widget(list, area);
}

pub fn draw_board(f: &mut Frame, app: &App, area: Rect) {
    let Some(board) = app.board() else {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Pick a ship to load its board",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Board "));
        f.render_widget(hint, area);
        return;
    };

    let image_note = if app.asset_exists(&board.image) {
        board.image.clone()
    } else {
        format!("{} (missing)", board.image)
    };
    let view_box = board.overlay.view_box;
    let selected = app.selected_zone_name();
    let clicked = app.last_result().map(|o| o.resolution.zone.as_str());

    // SVG y grows downward; the canvas y grows upward
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Board: {} ", image_note)),
        )
        .marker(Marker::Braille)
        .x_bounds([view_box.min_x, view_box.max_x()])
        .y_bounds([-view_box.max_y(), -view_box.min_y])
        .paint(move |ctx| {
            for zp in &board.overlay.polygons {
                let color = if clicked == Some(zp.zone.as_str()) {
                    Color::Green
                } else if selected == Some(zp.zone.as_str()) {
                    Color::Yellow
                } else {
                    Color::DarkGray
                };
                for (a, b) in zp.polygon.edges() {
                    ctx.draw(&CanvasLine::new(a.x, -a.y, b.x, -b.y, color));
                }
            }
            ctx.layer();
            for zp in &board.overlay.polygons {
                let c = zp.polygon.centroid();
                ctx.print(c.x, -c.y, Span::styled(zp.zone.clone(), Style::default().fg(Color::Gray)));
            }
        });

    f.render_widget(canvas, area);
}
