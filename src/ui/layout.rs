//! Layout components (content split, status bar)

use crate::app::App;
use crate::platform::{REFRESH_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the category listing panel
const LIST_WIDTH: u16 = 28;

/// Narrowest form column that still fits the form beside the listing
const FORM_MIN_WIDTH: u16 = 50;

/// Form height when the listing is stacked below it
const STACKED_FORM_HEIGHT: u16 = 13;

/// Split the screen into form area, listing panel and status bar.
///
/// Narrow terminals get the listing below the form instead of beside it.
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = if area.width < FORM_MIN_WIDTH + LIST_WIDTH {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(STACKED_FORM_HEIGHT), // Form
                Constraint::Min(0),                      // Categories
            ])
            .split(rows[0])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),             // Form
                Constraint::Length(LIST_WIDTH), // Categories
            ])
            .split(rows[0])
    };

    (columns[0], columns[1], rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Request status
    let indicator = if app.state.is_submitting() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    spans.push(Span::styled(
        format!(
            "Tab:focus  Enter/{}:submit  {}:refresh  Esc:quit",
            shortcut_hint(SUBMIT_SHORTCUT),
            shortcut_hint(REFRESH_SHORTCUT)
        ),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.state.server_url.as_str(),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// "Ctrl+S" -> "^S"
fn shortcut_hint(shortcut: &str) -> String {
    shortcut.replace("Ctrl+", "^")
}
