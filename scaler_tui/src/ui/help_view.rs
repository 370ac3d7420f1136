//! Help tab view

use crate::app::App;
use crate::ui::section_header;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        section_header("Navigation"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select actor"),
        key_line("?", "Toggle help"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section_header("Scaling"),
        key_line("←/h  →/l", "Lower/raise pending CR (1-10)"),
        key_line("1-9, 0", "Jump to CR 1-9, 0 for CR 10"),
        key_line("Enter / Space", "Apply pending CR to the selected NPC"),
        key_line("s", "Save roster"),
        key_line("r", "Reload roster (discard changes)"),
        Line::from(""),
        section_header("What Apply Does"),
        Line::from("  Overwrites max HP, armor class, proficiency and all six abilities"),
        Line::from("  Replaces every owned item with the tier's equipment list"),
        Line::from("  Stores the CR on the actor under the configured flag scope"),
        Line::from("  Player characters are never scaled"),
        Line::from(""),
        section_header("Log"),
    ];
    lines.extend(app.log.iter().map(|m| Line::from(format!("  {}", m))));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .scroll((u16::try_from(app.log_scroll).unwrap_or(u16::MAX), 0));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
