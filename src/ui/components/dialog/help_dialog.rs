//! Key binding help overlay

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Style},
    text::Span,
    Frame,
};

const HELP_TEXT: &str = "\
Tab / Down: next field
Shift+Tab / Up: previous field
Space: toggle checkbox
Left / Right: change number or pick option
Enter: toggle checkbox, next field, or predict on the button
Ctrl+S: predict
Ctrl+R: clear the form
Esc / Ctrl+C: quit

Every number and text field must be changed before a prediction is sent.";

/// Render the help dialog
pub fn render_help_dialog(frame: &mut Frame) {
    render_dialog(
        frame,
        DialogConfig {
            title: "Keys",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: HELP_TEXT,
            hint: Some(vec![
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("F1", Style::default().fg(Color::Cyan)),
                Span::raw(" to close"),
            ]),
            max_width: 70,
        },
    );
}
