//! Confirmation view shown after a successful submission

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the thank-you panel with the "send another" button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.state.locale.strings();

    let block = Block::default()
        .title(format!(" {} ", strings.form_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(6),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .horizontal_margin(4)
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("✓ {}", strings.success_title),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(strings.success_body),
    ];
    if let Some(receipt) = &app.controller.state().receipt {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", strings.receipt_label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(receipt.short_id(), Style::default().fg(Color::Yellow)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );

    let button_width = (strings.send_another.chars().count() as u16 + 6).min(chunks[2].width);
    let button_area = Rect {
        x: chunks[2].x + (chunks[2].width.saturating_sub(button_width)) / 2,
        width: button_width,
        ..chunks[2]
    };
    render_button(frame, button_area, strings.send_another, true, true);
}
