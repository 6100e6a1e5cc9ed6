//! Input form panel: the seven customer controls.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Field, TENURE_MAX};

const SLIDER_WIDTH: u16 = 24;

/// Draw the input form with the focused control highlighted.
pub fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = Field::all()
        .iter()
        .map(|field| {
            let style = if *field == app.focus {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let marker = if *field == app.focus { ">" } else { " " };
            Line::from(format!(
                " {marker} {:<18} {}",
                format!("{}:", field.name()),
                field_value(app, *field)
            ))
            .style(style)
        })
        .collect();

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Customer "),
    );

    frame.render_widget(form, area);
}

fn field_value(app: &App, field: Field) -> String {
    match field {
        Field::Tenure => slider(app.tenure),
        Field::MonthlyCharges => text_buffer(&app.monthly_charges, app.focus == field),
        Field::TotalCharges => text_buffer(&app.total_charges, app.focus == field),
        Field::Contract => {
            dropdown(churn_model::Contract::all().iter().map(|c| c.name()), app.contract.name())
        }
        Field::InternetService => dropdown(
            churn_model::InternetService::all().iter().map(|s| s.name()),
            app.internet_service.name(),
        ),
        Field::OnlineSecurity => dropdown(
            churn_model::ServiceOption::all().iter().map(|s| s.name()),
            app.online_security.name(),
        ),
        Field::TechSupport => dropdown(
            churn_model::ServiceOption::all().iter().map(|s| s.name()),
            app.tech_support.name(),
        ),
    }
}

fn slider(tenure: u16) -> String {
    let filled = (u32::from(tenure) * u32::from(SLIDER_WIDTH) / u32::from(TENURE_MAX)) as u16;
    let mut bar = String::new();
    for i in 0..SLIDER_WIDTH {
        bar.push(if i < filled { '█' } else { '░' });
    }
    format!("{bar} {tenure}")
}

fn text_buffer(buffer: &str, focused: bool) -> String {
    if focused {
        format!("{buffer}_")
    } else if buffer.is_empty() {
        "--".to_string()
    } else {
        buffer.to_string()
    }
}

fn dropdown<'a>(options: impl Iterator<Item = &'a str>, selected: &str) -> String {
    options
        .map(|name| {
            if name == selected {
                format!("[{name}]")
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}
