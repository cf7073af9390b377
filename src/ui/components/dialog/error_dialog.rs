//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Style},
    text::Span,
    Frame,
};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, title: &str, message: &str, hint: &str) {
    render_dialog(
        frame,
        DialogConfig {
            title,
            title_color: Color::Red,
            border_color: Color::Red,
            message,
            hint: Some(vec![Span::styled(hint, Style::default().fg(Color::Cyan))]),
            max_width: 60,
        },
    );
}
