//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;

use crate::app::App;
use crate::state::{InquiryView, SubmissionStatus};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header, app);
    layout::draw_contact_panel(frame, areas.contact, app);

    match app.controller.view() {
        InquiryView::Form => forms::draw_inquiry_form(frame, areas.main, app),
        InquiryView::Confirmation => confirmation::draw(frame, areas.main, app),
    }

    layout::draw_status_bar(frame, areas.status, app);

    // Failure dialog sits on top of the form it came from
    let inquiry = app.controller.state();
    if inquiry.status == SubmissionStatus::Failed {
        let strings = app.state.locale.strings();
        let detail = inquiry.failure.as_deref().unwrap_or_default();
        let message = format!("{detail}\n\n{}", strings.failure_hint);
        components::render_error_dialog(
            frame,
            strings.failure_title,
            &message,
            strings.dialog_help,
        );
    }
}
