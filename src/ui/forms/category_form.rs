//! Add-category form rendering

use super::field_renderer::{draw_field, draw_help_text};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::Form;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Minimum width of the form beside the action panel
const FORM_MIN_WIDTH: u16 = 30;

/// Width of the action panel when it sits beside the form
const ACTION_PANEL_WIDTH: u16 = 20;

/// Draw the add-category form with its action panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = if area.width < FORM_MIN_WIDTH + ACTION_PANEL_WIDTH {
        // Too narrow for side by side: action panel goes below the form
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),                    // Form area
                Constraint::Length(BUTTON_HEIGHT + 2), // Action panel
            ])
            .split(area)
    } else {
        // Split into form (left) and action panel (right)
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(FORM_MIN_WIDTH),        // Form area
                Constraint::Length(ACTION_PANEL_WIDTH), // Action panel
            ])
            .split(area)
    };

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let field_active = !form.is_submit_button_active();

    let border_color = if field_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Add a New Trivia Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category
            Constraint::Length(3), // Help text
            Constraint::Min(0),    // Remaining space
        ])
        .margin(1)
        .split(area);

    if let Some(field) = form.get_field(0) {
        draw_field(frame, chunks[0], field, field_active);
    }

    let submit_hint = format!("Enter or {SUBMIT_SHORTCUT} submits the category.");
    draw_help_text(
        frame,
        chunks[1],
        &["Type the name of the new category.", submit_hint.as_str()],
    );
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.state.form.is_submit_button_active();
    let submitting = app.state.is_submitting();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(inner_area);

    // Disabled while a request is outstanding
    let label = if submitting { "Submitting…" } else { "Submit" };
    render_button(
        frame,
        button_chunks[0],
        label,
        is_focused,
        !submitting,
        Color::Green,
    );
}
