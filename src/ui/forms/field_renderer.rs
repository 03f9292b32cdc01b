//! Field rendering for the prediction form

use crate::state::FieldController;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a single field box
pub const FIELD_HEIGHT: u16 = 3;

/// Draw one field box: checkbox, number input or text input with cursor
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldController, is_active: bool) {
    let error = field.error_message();

    let border_style = match (&error, is_active) {
        (Some(_), _) => Style::default().fg(Color::Red),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = match field {
        FieldController::Boolean(f) => {
            let mark = if f.checked() { "[x]" } else { "[ ]" };
            let mut style = text_style;
            if f.checked() {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(mark, style))
        }
        FieldController::Numeric(f) => {
            let mut spans = vec![
                Span::styled(f.input().to_string(), text_style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ];
            // The record still holds the last accepted value
            if error.is_some() {
                spans.push(Span::styled(
                    format!("  (sending {})", f.value()),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            Line::from(spans)
        }
        FieldController::Categorical(f) => {
            let text = if f.text().is_empty() && !is_active {
                Span::styled("(empty)", Style::default().fg(Color::DarkGray))
            } else {
                Span::styled(f.text().to_string(), text_style)
            };
            Line::from(vec![text, Span::styled(cursor, Style::default().fg(Color::Cyan))])
        }
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.name()))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(content).block(block), area);
}
