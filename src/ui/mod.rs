//! UI module for rendering the TUI

mod category_list;
mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, list_area, status_area) = layout::create_layout(frame.area());

    forms::draw_category_form(frame, form_area, app);
    category_list::draw(frame, list_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Alerts are drawn last so they sit on top of everything
    if let Some(message) = app.state.current_alert() {
        components::render_alert_dialog(frame, message);
    }
}
