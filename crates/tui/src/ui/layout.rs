//! Main layout for the widget.

use ratatui::prelude::*;

use super::footer::draw_footer;
use super::form::draw_form;
use super::header::draw_header;
use super::result::draw_result;
use crate::app::App;

/// Draw the main UI layout.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Create main layout: header, form, result, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(11),   // Input form
            Constraint::Length(4), // Result panel
            Constraint::Length(2), // Footer
        ])
        .split(size);

    draw_header(frame, chunks[0], app);
    draw_form(frame, chunks[1], app);
    draw_result(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);
}
