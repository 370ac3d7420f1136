//! Sheet tab view: the selected actor with the pending tier's changes previewed

use crate::app::App;
use crate::ui::{section_header, stat_line_with_preview};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use scaler_core::{Ability, Character, CharacterUpdate, TierResolver};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(actor) = app.selected_actor() else {
        let empty = Paragraph::new("No actors in roster.")
            .block(Block::default().borders(Borders::ALL).title(" Sheet "));
        f.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(area);

    // Only NPCs get a preview; the command refuses anything else
    let preview = if actor.is_npc() {
        TierResolver::new(&app.table)
            .update_for(app.pending_tier.into())
            .filter(|update| !update.is_empty())
    } else {
        None
    };

    draw_sheet(f, app, actor, preview.as_ref(), chunks[0]);
    draw_log(f, app, chunks[1]);
}

fn draw_sheet(
    f: &mut Frame,
    app: &App,
    actor: &Character,
    preview: Option<&CharacterUpdate>,
    area: Rect,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stored = app
        .selected_stored_tier()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "unset".to_string());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                actor.name.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  ({:?})", actor.kind), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("CR Scale  ", Style::default().fg(Color::Gray)),
            Span::styled(format!("[ {} ]", app.pending_tier), Style::default().fg(Color::Cyan)),
            Span::styled(format!("  stored: {}", stored), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        section_header("Attributes"),
        stat_line_with_preview("Max HP", actor.attributes.hp.max, preview.and_then(|p| p.hp_max)),
        stat_line_with_preview("Armor Class", actor.attributes.ac, preview.and_then(|p| p.ac)),
        stat_line_with_preview("Proficiency", actor.attributes.prof, preview.and_then(|p| p.prof)),
        Line::from(""),
        section_header("Abilities"),
    ];
    for ability in Ability::all() {
        lines.push(stat_line_with_preview(
            ability.abbreviation(),
            actor.abilities.get(*ability),
            preview.and_then(|p| p.abilities).map(|a| a.get(*ability)),
        ));
    }

    let sheet =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Sheet "));
    f.render_widget(sheet, columns[0]);

    let mut item_lines = vec![section_header("Owned")];
    for item in &actor.items {
        let mut text = format!("  {} ({:?})", item.name, item.item_type);
        if let Some(quantity) = item.quantity {
            text.push_str(&format!(" x{}", quantity));
        }
        item_lines.push(Line::from(text));
    }
    if let Some(items) = preview.and_then(|p| p.items.as_ref()) {
        item_lines.push(Line::from(""));
        item_lines.push(section_header("After Apply"));
        for item in items {
            item_lines.push(Line::from(Span::styled(
                format!("  {}", item.name),
                Style::default().fg(Color::Green),
            )));
        }
    }

    let items =
        Paragraph::new(item_lines).block(Block::default().borders(Borders::ALL).title(" Items "));
    f.render_widget(items, columns[1]);
}

fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.log.len().saturating_sub(visible);
    let lines: Vec<Line> = app.log[start..].iter().map(|m| Line::from(m.clone())).collect();

    let log = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Log "));
    f.render_widget(log, area);
}
