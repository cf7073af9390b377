//! Layout components (header, contact panel, status bar)

use crate::app::App;
use crate::platform::SEND_SHORTCUT;
use crate::state::InquiryView;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the contact panel beside the form
const CONTACT_WIDTH: u16 = 34;

/// Regions of the screen
pub struct Areas {
    pub header: Rect,
    pub main: Rect,
    pub contact: Rect,
    pub status: Rect,
}

/// Split the frame into header, main content, contact panel and status bar
pub fn create_layout(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),              // Form
            Constraint::Length(CONTACT_WIDTH), // Contact channels
        ])
        .split(rows[1]);

    Areas {
        header: rows[0],
        main: columns[0],
        contact: columns[1],
        status: rows[2],
    }
}

/// Draw the brand banner
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.state.locale.strings();
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", strings.brand),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(strings.tagline, Style::default().fg(Color::Gray)),
    ]);
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the phone, email and factory address panel
pub fn draw_contact_panel(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.state.locale.strings();

    let mut lines = vec![
        Line::from(Span::styled(
            strings.contact_title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            strings.contact_intro,
            Style::default().fg(Color::Gray),
        )),
    ];
    for channel in &strings.channels {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            channel.label,
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(Span::styled(
            channel.value,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(channel.note));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.state.locale.strings();
    let mut spans = vec![Span::raw(" ")];

    let hints = match app.controller.view() {
        InquiryView::Form => format!(
            "{}  {SEND_SHORTCUT}: {}",
            strings.form_help, strings.send_verb
        ),
        InquiryView::Confirmation => strings.confirmation_help.to_string(),
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";
    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        width: quit_width.min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
