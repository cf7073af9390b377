//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by the inline error under a field
pub const ERROR_HEIGHT: u16 = 1;

/// Everything needed to draw one input field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub error: Option<&'a str>,
    pub is_active: bool,
    pub is_multiline: bool,
}

/// Draw a bordered field with its inline error on the row below
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(ERROR_HEIGHT)])
        .split(area);

    let border_style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = Span::styled(
        if field.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if field.value.is_empty() {
        Paragraph::new(Line::from(vec![
            cursor,
            Span::styled(
                field.placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        let style = if field.is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        Paragraph::new(Line::from(vec![Span::styled(field.value, style), cursor]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = field.error {
        let error_line = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error_line, chunks[1]);
    }
}
