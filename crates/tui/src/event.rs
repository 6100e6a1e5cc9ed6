//! Event handling for the widget.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use churn_model::ChurnModel;

use crate::app::App;

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, model: &ChurnModel, key: KeyEvent) {
    // Global shortcuts. The numeric buffers only accept digits and '.',
    // so 'q' never collides with text entry.
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match key.code {
        // Field navigation
        KeyCode::Tab | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),

        // Adjust the focused control
        KeyCode::Left => app.step_left(),
        KeyCode::Right => app.step_right(),
        KeyCode::Char(' ') if app.focus.is_dropdown() => app.step_right(),

        // Numeric entry
        KeyCode::Char(ch) if app.focus.is_numeric() => app.push_char(ch),
        KeyCode::Backspace => app.pop_char(),

        // Run the prediction
        KeyCode::Enter => {
            app.set_status("Predicting...");
            app.run_prediction(model);
        }

        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
