//! Roster tab view

use crate::app::App;
use crate::ui::section_header;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use scaler_core::{command::stored_tier, Ability};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    draw_actor_list(f, app, chunks[0]);
    draw_tier_preview(f, app, chunks[1]);
}

fn draw_actor_list(f: &mut Frame, app: &App, area: Rect) {
    let scope = &app.settings.scaler.flag_scope;

    let items: Vec<ListItem> = app
        .store
        .actors()
        .iter()
        .map(|actor| {
            let tier = match stored_tier(actor, scope) {
                Some(t) => format!("CR {:>2}", t.value()),
                None => "CR  -".to_string(),
            };
            let name_style = if actor.is_npc() {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:6} ", tier), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{:24}", actor.name), name_style),
                Span::styled(
                    format!("HP {:>3}  AC {:>2}", actor.attributes.hp.max, actor.attributes.ac),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Actors "))
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    if !app.store.is_empty() {
        state.select(Some(app.selected));
    }
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_tier_preview(f: &mut Frame, app: &App, area: Rect) {
    let entry = app.table.entry(app.pending_tier);
    let def = &entry.definition;

    let mut lines = vec![
        section_header(&format!("CR {}", entry.tier)),
        Line::from(format!("  Max HP        {}", def.hp)),
        Line::from(format!("  Armor Class   {}", def.ac)),
        Line::from(format!("  Attack Bonus  +{}", def.attack_bonus)),
        Line::from(format!("  Proficiency   +{}", def.proficiency)),
        Line::from(""),
        section_header("Abilities"),
        Line::from(Span::styled(
            format!(
                "  {}",
                Ability::all()
                    .iter()
                    .map(|a| format!("{:>3}", a.abbreviation()))
                    .collect::<Vec<_>>()
                    .join(" ")
            ),
            Style::default().fg(Color::Gray),
        )),
        Line::from(format!(
            "  {}",
            def.abilities
                .iter()
                .map(|s| format!("{:>3}", s))
                .collect::<Vec<_>>()
                .join(" ")
        )),
        Line::from(""),
        section_header("Equipment"),
    ];
    if entry.equipment.is_empty() {
        lines.push(Line::from(Span::styled("  (none)", Style::default().fg(Color::DarkGray))));
    }
    for name in entry.equipment.names() {
        lines.push(Line::from(format!("  • {}", name)));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Pending Tier "));

    f.render_widget(paragraph, area);
}
