//! Prediction form rendering: field grid, Predict button and result box

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, SubmissionOutcome};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::visible_rows;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const COLUMNS: usize = 3;

/// Draw the whole form
pub fn draw_prediction_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Home Value Prediction ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_HEIGHT),     // Fields
            Constraint::Length(BUTTON_HEIGHT), // Predict
            Constraint::Length(3),             // Result
        ])
        .split(inner);

    draw_grid(frame, chunks[0], app);

    let actions = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(0)])
        .split(chunks[1]);
    let form = &app.state.form;
    let label = if form.outcome().is_loading() {
        "Predicting"
    } else {
        "Predict"
    };
    render_button(
        frame,
        actions[0],
        label,
        form.is_button_active(),
        !form.outcome().is_loading(),
    );

    draw_outcome(frame, chunks[2], form.outcome());
}

fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let controllers = form.controllers();
    let total_rows = controllers.len().div_ceil(COLUMNS);
    let active_row = if form.is_button_active() {
        total_rows.saturating_sub(1)
    } else {
        form.active_field() / COLUMNS
    };
    let capacity = (area.height / FIELD_HEIGHT) as usize;
    let rows = visible_rows(active_row, total_rows, capacity);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            rows.clone()
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(area);

    for (slot, row) in rows.enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(row_areas[slot]);

        for column in 0..COLUMNS {
            let index = row * COLUMNS + column;
            if let Some(controller) = controllers.get(index) {
                draw_field(frame, cells[column], controller, form.active_field() == index);
            }
        }
    }
}

fn draw_outcome(frame: &mut Frame, area: Rect, outcome: &SubmissionOutcome) {
    let color = match outcome {
        SubmissionOutcome::Idle => Color::DarkGray,
        SubmissionOutcome::Loading => Color::Yellow,
        SubmissionOutcome::Success { .. } => Color::Green,
        SubmissionOutcome::InvalidCombination
        | SubmissionOutcome::MissingFields
        | SubmissionOutcome::Failed { .. } => Color::Red,
    };

    let result = Paragraph::new(outcome.display_text())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(" Result ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(result, area);
}
