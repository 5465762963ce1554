// src/ui/render.rs

//! Rendering: turns the prompt state into ratatui lines. Pure formatting;
//! all list mutation lives in the engine.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthChar;

use crate::engine::choice::{Disabled, ListEntry};
use crate::engine::config::{Instructions, PromptConfig};
use crate::engine::state::PromptState;

const CHECKED_ICON: &str = "◉";
const UNCHECKED_ICON: &str = "◯";
const CURSOR_ICON: &str = "❯";

const HELP_TIP: &str = " (<?> help, <space> select, <a> toggle all, <i> invert selection, \
<ctrl/shift/meta + up/k, down/j, pgup/t or pgdown/b> move selected items, \
<ctrl/shift/meta + left/h or right/l> move single items, \
<m or M> move selected above or below cursor, <enter> proceed)";

const OVERFLOW_HINT: &str = "(Use arrow keys to reveal more choices)";

pub fn draw<V: Clone>(frame: &mut Frame, state: &PromptState<V>, config: &PromptConfig<V>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(header(state, config), chunks[0]);
    render_list(frame, chunks[1], state, config);
    frame.render_widget(footer(state, config), chunks[2]);
    if let Some(error) = &state.error {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("> {error}"),
                Style::default().fg(Color::Red),
            ))),
            chunks[3],
        );
    }
}

fn header<'a, V: Clone>(state: &'a PromptState<V>, config: &'a PromptConfig<V>) -> Paragraph<'a> {
    let mut spans = vec![
        Span::styled("? ", Style::default().fg(Color::Green)),
        Span::styled(
            config.message.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if state.show_help {
        match &config.instructions {
            Instructions::Auto => {
                spans.push(Span::styled(HELP_TIP, Style::default().fg(Color::DarkGray)));
            }
            Instructions::Custom(text) => {
                spans.push(Span::styled(
                    format!(" {text}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Instructions::Hidden => {}
        }
    }
    Paragraph::new(Line::from(spans))
}

fn render_list<V: Clone>(
    frame: &mut Frame,
    area: Rect,
    state: &PromptState<V>,
    config: &PromptConfig<V>,
) {
    let page = config.page_size.min(area.height as usize).max(1);
    let start = window_start(state.active, state.entries.len(), page);
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::with_capacity(page);
    for (row, entry) in state.entries.iter().enumerate().skip(start).take(page) {
        lines.push(entry_line(entry, row == state.active, width));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

fn entry_line<'a, V>(entry: &'a ListEntry<V>, is_active: bool, width: usize) -> Line<'a> {
    let cursor = if is_active { CURSOR_ICON } else { " " };
    match entry {
        ListEntry::Separator(text) => Line::from(Span::styled(
            fit(format!("{cursor} {text}"), width),
            Style::default().fg(Color::DarkGray),
        )),
        ListEntry::Choice(choice) => {
            if choice.disabled.is_disabled() {
                let label = match &choice.disabled {
                    Disabled::Reason(reason) => reason.as_str(),
                    _ => "(disabled)",
                };
                return Line::from(Span::styled(
                    fit(format!("- {} {label}", choice.name), width),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let icon = if choice.checked {
                Span::styled(CHECKED_ICON, Style::default().fg(Color::Green))
            } else {
                Span::raw(UNCHECKED_ICON)
            };
            let style = if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(cursor, style),
                icon,
                Span::styled(fit(format!(" {}", choice.name), width.saturating_sub(2)), style),
            ])
        }
    }
}

fn footer<'a, V: Clone>(state: &'a PromptState<V>, config: &'a PromptConfig<V>) -> Paragraph<'a> {
    if let Some(description) = state
        .active_entry()
        .as_choice()
        .and_then(|choice| choice.description.as_deref())
    {
        return Paragraph::new(Line::from(Span::styled(
            description,
            Style::default().fg(Color::Cyan),
        )));
    }
    if state.entries.len() > config.page_size {
        return Paragraph::new(Line::from(Span::styled(
            OVERFLOW_HINT,
            Style::default().fg(Color::DarkGray),
        )));
    }
    Paragraph::new(Line::default())
}

/// Post-completion summary: the checked entries' short labels after the
/// message, in final list order.
pub fn summary<V: Clone>(state: &PromptState<V>, config: &PromptConfig<V>) -> String {
    let shorts: Vec<&str> = state
        .entries
        .iter()
        .filter(|entry| entry.is_checked())
        .filter_map(|entry| entry.as_choice())
        .map(|choice| choice.short.as_str())
        .collect();
    if shorts.is_empty() {
        format!("✔ {}", config.message)
    } else {
        format!("✔ {} {}", config.message, shorts.join(", "))
    }
}

/// First visible row; keeps the active row inside the page without the
/// looped-window behavior of the host pagination.
fn window_start(active: usize, len: usize, page: usize) -> usize {
    if len <= page {
        0
    } else {
        active.saturating_sub(page / 2).min(len - page)
    }
}

/// Truncates to the given display width, honoring wide glyphs.
fn fit(text: String, width: usize) -> String {
    let mut used = 0;
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
