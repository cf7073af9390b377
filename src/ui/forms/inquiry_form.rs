//! Inquiry form rendering

use super::field_renderer::{draw_field, FieldView, ERROR_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, Form};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the four inquiry fields and the submit button
pub fn draw_inquiry_form(frame: &mut Frame, area: Rect, app: &App) {
    let strings = app.state.locale.strings();
    let inquiry = app.controller.state();
    let focus = &app.state.focus;

    let block = Block::default()
        .title(format!(" {} ", strings.form_title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3 + ERROR_HEIGHT), // Name
            Constraint::Length(3 + ERROR_HEIGHT), // Phone
            Constraint::Length(3 + ERROR_HEIGHT), // Email
            Constraint::Min(5 + ERROR_HEIGHT),    // Message
            Constraint::Length(BUTTON_HEIGHT),    // Submit
        ])
        .horizontal_margin(1)
        .split(inner);

    for field in FieldName::ALL {
        let label = strings.field_label(field);
        let error = inquiry
            .errors
            .get(field)
            .map(|err| err.message(app.state.locale));
        draw_field(
            frame,
            chunks[field.index()],
            &FieldView {
                label: &label,
                value: inquiry.input.get(field),
                placeholder: strings.placeholder(field),
                error,
                is_active: focus.active_field() == field.index(),
                is_multiline: field.is_multiline(),
            },
        );
    }

    let submitting = app.controller.is_submitting();
    let label = if submitting {
        strings.submitting
    } else {
        strings.submit
    };
    render_button(
        frame,
        chunks[FieldName::ALL.len()],
        label,
        focus.is_button_active(),
        !submitting,
    );
}
