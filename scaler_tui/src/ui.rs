//! UI rendering

mod help_view;
mod roster_view;
mod sheet_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Roster => roster_view::draw(f, app, chunks[1]),
        Tab::Sheet => sheet_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("s", "Save"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Roster | Tab::Sheet => vec![
            ("↑/↓", "Select NPC"),
            ("←/→ 0-9", "Pick CR"),
            ("Enter", "Apply"),
        ],
        Tab::Help => vec![("↑/↓", "Scroll log")],
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

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
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

    let title = if app.dirty {
        " NPC Scaler [modified] "
    } else {
        " NPC Scaler "
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub fn stat_line(name: &str, value: i32) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("{}", value), Style::default().fg(Color::White)),
    ])
}

/// Current value with the value the pending tier would write, when they differ
pub fn stat_line_with_preview(name: &str, current: i32, preview: Option<i32>) -> Line<'static> {
    match preview {
        Some(next) if next != current => Line::from(vec![
            Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
            Span::styled(format!("{}", current), Style::default().fg(Color::White)),
            Span::styled(" → ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", next),
                Style::default().fg(if next > current { Color::Green } else { Color::Red }),
            ),
        ]),
        _ => stat_line(name, current),
    }
}
