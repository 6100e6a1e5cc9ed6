//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the footer bar with context-sensitive help.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let field_help = if app.focus.is_numeric() {
        "[0-9.] Type  [Backspace] Delete"
    } else if app.focus.is_dropdown() {
        "[←→/Space] Change option"
    } else {
        "[←→] Adjust tenure"
    };
    let help_text = format!("{field_help}  |  [Tab/↑↓] Field  [Enter] Predict  [q] Quit");

    // Add status message if present
    let display_text = if let Some((status, _)) = &app.status_message {
        format!("{} | {}", status, help_text)
    } else {
        help_text
    };

    let footer = Paragraph::new(display_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
