//! Success view shown after a completed submission

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the confirmation view that replaces the form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Application Received ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Thank you for applying!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("We have received your enrollment application and"),
        Line::from("will get back to you within a few days."),
        Line::from(""),
    ];

    if let Some(receipt) = &app.state.receipt {
        lines.push(Line::from(vec![
            Span::raw("Confirmation: "),
            Span::styled(
                receipt.confirmation_id.to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::raw("Received at:  "),
            Span::styled(
                receipt.received_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press Enter to exit",
        Style::default().fg(Color::DarkGray),
    )));

    let content = Paragraph::new(lines).centered().block(block);
    frame.render_widget(content, area);
}
