//! Field rendering utilities for the enrollment form

use crate::state::{FieldValue, FormField, PAST_WORK_NO, PAST_WORK_YES};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies: bordered value area plus an error line when set
pub fn field_height(field: &FormField) -> u16 {
    let base = if field.is_multiline { 5 } else { 3 };
    if field.error.is_some() {
        base + 1
    } else {
        base
    }
}

/// Border color for a field: red when errored, cyan when focused
fn border_style(field: &FormField, is_active: bool) -> Style {
    if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Draw one field: bordered value, focus cursor, and the inline error
/// annotation underneath when present.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    group_cursor: usize,
    display_override: Option<&str>,
) {
    let error_height = if field.error.is_some() { 1 } else { 0 };
    let value_area = Rect {
        height: area.height.saturating_sub(error_height),
        ..area
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(field, is_active));

    let content = match &field.value {
        FieldValue::Checks(opts) => group_line(opts, is_active, group_cursor),
        FieldValue::Choice(selected) => {
            choice_line(selected.as_deref(), is_active, group_cursor)
        }
        _ => text_content(field, is_active, display_override),
    };

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), value_area);

    if let Some(message) = &field.error {
        let error_area = Rect {
            y: area.y + value_area.height,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("  {message}"),
                Style::default().fg(Color::Red),
            ))),
            error_area,
        );
    }
}

fn text_content<'a>(
    field: &'a FormField,
    is_active: bool,
    display_override: Option<&'a str>,
) -> Paragraph<'a> {
    let style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let display_value = display_override
        .map(str::to_string)
        .unwrap_or_else(|| field.display_value());
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };
    let cursor = if is_active { "▌" } else { "" };

    if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    }
}

/// Checkbox group: `[x] Option` cells, the cursor-highlighted one bold
fn group_line<'a>(
    opts: &'a [(String, bool)],
    is_active: bool,
    group_cursor: usize,
) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (i, (value, checked)) in opts.iter().enumerate() {
        let mark = if *checked { "[x]" } else { "[ ]" };
        let mut style = if *checked {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_active && i == group_cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!("{mark} {value}"), style));
        spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(spans))
}

/// Radio group: fixed yes/no options
fn choice_line<'a>(selected: Option<&str>, is_active: bool, group_cursor: usize) -> Paragraph<'a> {
    let mut spans = Vec::new();
    for (i, value) in [PAST_WORK_YES, PAST_WORK_NO].iter().enumerate() {
        let mark = if selected == Some(*value) {
            "(•)"
        } else {
            "( )"
        };
        let mut style = if selected == Some(*value) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if is_active && i == group_cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!("{mark} {value}"), style));
        spans.push(Span::raw("  "));
    }
    Paragraph::new(Line::from(spans))
}
