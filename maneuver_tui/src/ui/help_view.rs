//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        section("═══ Navigation ═══"),
        key_line("Tab", "Switch between ship and zone lists"),
        key_line("↑/k  ↓/j", "Move the selection"),
        key_line("1-9", "Pick a ship directly"),
        key_line("? / F1", "Toggle help"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section("═══ Rolling ═══"),
        key_line("Enter", "Load the selected ship / roll for the selected zone"),
        key_line("Mouse click", "Roll for the zone under the cursor"),
        key_line("r", "Roll again for the last zone"),
        Line::from(""),
        section("═══ Maneuvers ═══"),
        Line::from(""),
        Line::from(Span::styled("Zones:", Style::default().fg(Color::Yellow))),
        Line::from("  <arc>_<range>, e.g. forwardquarter_green"),
        Line::from("  Abeam and the quarters list a maneuver for a target on each side;"),
        Line::from("  identical results show once"),
        Line::from(""),
        Line::from(Span::styled("Swerves:", Style::default().fg(Color::Yellow))),
        Line::from("  Maneuvers from neighbouring arcs on the same roll"),
        Line::from("  Kept when they turn the same way as the primary,"),
        Line::from("  or when either one doesn't turn at all"),
        Line::from(""),
        Line::from(Span::styled("Icons:", Style::default().fg(Color::Yellow))),
        Line::from("  images/maneuvers/<speed>.png and images/maneuvers/<vector>.png"),
        Line::from("  Greyed-out paths have no image on disk"),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
