//! Result panel.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Outcome};

/// Draw the prediction result panel.
pub fn draw_result(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match &app.outcome {
        None => (
            "Press [Enter] to run a prediction".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(outcome) => {
            let style = match outcome {
                Outcome::Prediction { churn: true, .. } => Style::default().fg(Color::Red),
                Outcome::Prediction { churn: false, .. } => Style::default().fg(Color::Green),
                Outcome::Invalid(_) => Style::default().fg(Color::Yellow),
                Outcome::Failed(_) => {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                }
            };
            (outcome.message(), style)
        }
    };

    let result = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Result "));

    frame.render_widget(result, area);
}
