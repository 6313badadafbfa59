use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use animal_farm::{Condition, Status};

use super::app::{App, EntryKind};

const HELP: &str = "a: action  d: duty  e: eat  s: sleep  h: hungry  z: sleepy  Tab/S-Tab: swap action/duty  q: quit";

/// Draw the UI layout
pub fn draw_ui(f: &mut Frame, app: &mut App) {
    // Roster on the left; status and log on the right
    let size = f.size();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(size);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3), Constraint::Length(3)])
        .split(columns[1]);

    draw_roster(f, app, columns[0]);
    draw_status(f, app, right[0]);
    draw_log(f, app, right[1]);
    draw_help(f, right[2]);
}

fn condition_style(status: &Status) -> Style {
    if status.conditions.contains(&Condition::Hungry) {
        Style::default().fg(Color::Red)
    } else if status.conditions.contains(&Condition::Sleepy) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    }
}

/// Draw the list of animals
fn draw_roster(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!("{} (↑↓: select)", app.farm.name))
        .borders(Borders::ALL);

    let inner_area = block.inner(area);
    app.set_ui_height(inner_area.height as usize);

    let items: Vec<ListItem> = app
        .farm
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(inner_area.height as usize)
        .map(|(i, animal)| {
            let status = animal.status();
            let marker = if status.is_ready() {
                "✅".to_string()
            } else {
                status.conditions.iter().map(Condition::as_symbol).collect::<String>()
            };

            let spans = vec![
                Span::styled(format!("{:<6}", status.kind), Style::default().fg(Color::Cyan)),
                Span::styled(status.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(marker, condition_style(&status)),
            ];

            let style = if i == app.cursor_position {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    f.render_widget(list, area);
}

/// Draw the status panel for the selected animal
fn draw_status(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("Status").borders(Borders::ALL);

    let lines = match app.selected().map(|a| a.status()) {
        Some(status) => {
            let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::DarkGray));
            vec![
                Line::from(vec![label("Name:   "), Span::styled(status.name.clone(), Style::default().add_modifier(Modifier::BOLD))]),
                Line::from(vec![label("Type:   "), Span::styled(status.kind.clone(), Style::default().fg(Color::Cyan))]),
                Line::from(vec![label("Legs:   "), Span::raw(status.legs.to_string())]),
                Line::from(vec![label("Action: "), Span::styled(status.action_label().to_string(), Style::default().fg(Color::Yellow))]),
                Line::from(vec![label("Duty:   "), Span::styled(status.duty_label().to_string(), Style::default().fg(Color::Magenta))]),
                Line::from(vec![label("State:  "), Span::styled(status.state_label(), condition_style(&status))]),
            ]
        }
        None => vec![Line::from("No animals on this farm")],
    };

    let paragraph = Paragraph::new(Text::from(lines)).block(block);
    f.render_widget(paragraph, area);
}

/// Draw the activity log, newest at the bottom
fn draw_log(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().title("Activity").borders(Borders::ALL);
    let visible = block.inner(area).height as usize;

    let lines: Vec<Line> = app
        .log
        .iter()
        .skip(app.log.len().saturating_sub(visible))
        .map(|entry| {
            let style = match entry.kind {
                EntryKind::Info => Style::default(),
                EntryKind::Refusal => Style::default().fg(Color::Yellow),
                EntryKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            };
            Line::from(Span::styled(entry.text.clone(), style))
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
