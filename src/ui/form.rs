//! Enrollment form rendering

use super::field_renderer::{draw_field, field_height};
use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SUBMIT_LABEL: &str = "Submit Application";
const BUTTON_HEIGHT: u16 = 3;

/// Draw the enrollment form view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Volunteer Enrollment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < BUTTON_HEIGHT + 1 {
        return;
    }

    // Bottom rows are reserved for the submit button and the help line
    let fields_area = Rect {
        height: inner.height - BUTTON_HEIGHT - 1,
        ..inner
    };
    let button_area = Rect {
        y: fields_area.y + fields_area.height,
        height: BUTTON_HEIGHT,
        ..inner
    };
    let help_area = Rect {
        y: button_area.y + BUTTON_HEIGHT,
        height: 1,
        ..inner
    };

    draw_fields(frame, fields_area, app);
    draw_submit_button(frame, button_area, app);
    draw_help(frame, help_area, app);
}

/// Stack visible fields top-down, starting at the scroll offset; fields
/// that fall past the bottom are simply not drawn this frame.
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let visible = app.state.form.visible_ids();
    let mut y = area.y;

    for id in visible.iter().skip(app.state.scroll_offset) {
        let field = app.state.form.field(*id);
        let height = field_height(field);
        if y + height > area.y + area.height {
            break;
        }
        let is_active = app.state.form.active_id() == Some(*id);
        let field_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };

        // The file field previews the path being typed until attached
        let override_text = if *id == FieldId::ProfilePicture
            && field.is_empty()
            && !app.file_path_input.is_empty()
        {
            Some(app.file_path_input.as_str())
        } else {
            None
        };

        draw_field(
            frame,
            field_area,
            field,
            is_active,
            app.state.group_cursor,
            override_text,
        );
        y += height;
    }
}

/// The submit control: disabled with a spinner while the call is pending
fn draw_submit_button(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.form.is_submit_active();

    let (label, style, border) = if app.is_submitting() {
        (
            format!("{} Submitting...", app.spinner_frame()),
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else if is_focused {
        (
            SUBMIT_LABEL.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Green),
        )
    } else {
        (
            SUBMIT_LABEL.to_string(),
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    };

    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border),
        );
    frame.render_widget(button, area);
}

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    if app.state.form.has_field_errors() {
        let notice = Paragraph::new(Line::from(Span::styled(
            "Please fix the highlighted fields before submitting",
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(notice, area);
        return;
    }
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(": toggle  "),
        Span::styled(
            crate::platform::SUBMIT_SHORTCUT,
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(": submit  "),
        Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
