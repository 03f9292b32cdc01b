//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::FieldController;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::Range;

/// Key hints shown on the left of the status bar
const HINTS: &str = "Tab:next  ←/→:change  Space:toggle  ^S:predict  ^R:reset  F1:help";

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Rows of a grid to draw so that `active_row` stays on screen
pub fn visible_rows(active_row: usize, total_rows: usize, capacity: usize) -> Range<usize> {
    if capacity == 0 {
        return 0..0;
    }
    if total_rows <= capacity {
        return 0..total_rows;
    }
    let start = active_row
        .saturating_sub(capacity - 1)
        .min(total_rows - capacity);
    start..start + capacity
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission indicator
    let indicator = if app.is_submitting() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(HINTS, Style::default().fg(Color::Gray)));

    // Suggestions for the focused text field
    if let Some(FieldController::Categorical(field)) = app.state.form.active_controller() {
        let suggestions = field.suggestions();
        if !suggestions.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                suggestions.join(", "),
                Style::default().fg(Color::Cyan),
            ));
        }
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Endpoint on the right
    let endpoint = format!(" {} ", app.state.endpoint);
    let width = (endpoint.chars().count() as u16).min(area.width);
    let endpoint_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width,
        height: 1,
    };
    let endpoint_widget =
        Paragraph::new(endpoint).style(Style::default().bg(Color::DarkGray).fg(Color::Blue));
    frame.render_widget(endpoint_widget, endpoint_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_rows(0, 3, 5), 0..3);
        assert_eq!(visible_rows(2, 5, 5), 0..5);
    }

    #[test]
    fn test_window_follows_active_row() {
        assert_eq!(visible_rows(0, 8, 3), 0..3);
        assert_eq!(visible_rows(2, 8, 3), 0..3);
        assert_eq!(visible_rows(3, 8, 3), 1..4);
        assert_eq!(visible_rows(7, 8, 3), 5..8);
    }

    #[test]
    fn test_window_never_runs_past_end() {
        assert_eq!(visible_rows(20, 8, 3), 5..8);
    }

    #[test]
    fn test_no_room() {
        assert_eq!(visible_rows(4, 8, 0), 0..0);
    }
}
