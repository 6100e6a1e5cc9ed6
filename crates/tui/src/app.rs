//! Application state management for the widget.

use std::time::Instant;

use churn_model::{ChurnModel, Contract, InternetService, ServiceOption, WidgetRecord};

/// Upper bound of the tenure slider, in months.
pub const TENURE_MAX: u16 = 72;

/// The seven input controls, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Tenure,
    MonthlyCharges,
    TotalCharges,
    Contract,
    InternetService,
    OnlineSecurity,
    TechSupport,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Tenure => Field::MonthlyCharges,
            Field::MonthlyCharges => Field::TotalCharges,
            Field::TotalCharges => Field::Contract,
            Field::Contract => Field::InternetService,
            Field::InternetService => Field::OnlineSecurity,
            Field::OnlineSecurity => Field::TechSupport,
            Field::TechSupport => Field::Tenure,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Field::Tenure => Field::TechSupport,
            Field::MonthlyCharges => Field::Tenure,
            Field::TotalCharges => Field::MonthlyCharges,
            Field::Contract => Field::TotalCharges,
            Field::InternetService => Field::Contract,
            Field::OnlineSecurity => Field::InternetService,
            Field::TechSupport => Field::OnlineSecurity,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Tenure => "Tenure (months)",
            Field::MonthlyCharges => "Monthly charges",
            Field::TotalCharges => "Total charges",
            Field::Contract => "Contract",
            Field::InternetService => "Internet service",
            Field::OnlineSecurity => "Online security",
            Field::TechSupport => "Tech support",
        }
    }

    pub fn all() -> &'static [Field] {
        &[
            Field::Tenure,
            Field::MonthlyCharges,
            Field::TotalCharges,
            Field::Contract,
            Field::InternetService,
            Field::OnlineSecurity,
            Field::TechSupport,
        ]
    }

    /// True for the two free-text numeric controls.
    pub fn is_numeric(self) -> bool {
        matches!(self, Field::MonthlyCharges | Field::TotalCharges)
    }

    /// True for the four dropdown controls.
    pub fn is_dropdown(self) -> bool {
        matches!(
            self,
            Field::Contract | Field::InternetService | Field::OnlineSecurity | Field::TechSupport
        )
    }
}

/// Result panel content.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A completed prediction: label plus positive-class probability.
    Prediction { churn: bool, probability: f32 },
    /// Input rejected before inference.
    Invalid(String),
    /// Inference itself failed.
    Failed(String),
}

impl Outcome {
    /// Human-readable message for the result panel.
    ///
    /// The stay message shows the complement of the churn probability;
    /// both come from the same underlying query.
    pub fn message(&self) -> String {
        match self {
            Outcome::Prediction {
                churn: true,
                probability,
            } => format!(
                "This customer is likely to churn (probability {:.2}).",
                probability
            ),
            Outcome::Prediction {
                churn: false,
                probability,
            } => format!(
                "This customer is likely to stay (probability {:.2}).",
                1.0 - probability
            ),
            Outcome::Invalid(msg) => format!("Invalid input: {msg}"),
            Outcome::Failed(msg) => format!("Prediction failed: {msg}"),
        }
    }
}

/// Main application state.
pub struct App {
    /// Currently focused control
    pub focus: Field,
    /// Tenure slider position
    pub tenure: u16,
    /// Monthly charges text buffer
    pub monthly_charges: String,
    /// Total charges text buffer
    pub total_charges: String,
    /// Contract dropdown
    pub contract: Contract,
    /// Internet service dropdown
    pub internet_service: InternetService,
    /// Online security dropdown
    pub online_security: ServiceOption,
    /// Tech support dropdown
    pub tech_support: ServiceOption,
    /// Latest prediction outcome
    pub outcome: Option<Outcome>,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            focus: Field::Tenure,
            tenure: 12,
            monthly_charges: String::new(),
            total_charges: String::new(),
            contract: Contract::default(),
            internet_service: InternetService::default(),
            online_security: ServiceOption::default(),
            tech_support: ServiceOption::default(),
            outcome: None,
            status_message: None,
            should_quit: false,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Move the focused control one step left (slider down, previous
    /// dropdown option). No-op on numeric fields.
    pub fn step_left(&mut self) {
        match self.focus {
            Field::Tenure => self.tenure = self.tenure.saturating_sub(1),
            Field::Contract => self.contract = self.contract.previous(),
            Field::InternetService => self.internet_service = self.internet_service.previous(),
            Field::OnlineSecurity => self.online_security = self.online_security.previous(),
            Field::TechSupport => self.tech_support = self.tech_support.previous(),
            _ => {}
        }
    }

    /// Move the focused control one step right.
    pub fn step_right(&mut self) {
        match self.focus {
            Field::Tenure => self.tenure = (self.tenure + 1).min(TENURE_MAX),
            Field::Contract => self.contract = self.contract.next(),
            Field::InternetService => self.internet_service = self.internet_service.next(),
            Field::OnlineSecurity => self.online_security = self.online_security.next(),
            Field::TechSupport => self.tech_support = self.tech_support.next(),
            _ => {}
        }
    }

    /// Append a character to the focused numeric buffer.
    pub fn push_char(&mut self, ch: char) {
        if !(ch.is_ascii_digit() || ch == '.') {
            return;
        }
        match self.focus {
            Field::MonthlyCharges => self.monthly_charges.push(ch),
            Field::TotalCharges => self.total_charges.push(ch),
            _ => {}
        }
    }

    /// Delete the last character of the focused numeric buffer.
    pub fn pop_char(&mut self) {
        match self.focus {
            Field::MonthlyCharges => {
                self.monthly_charges.pop();
            }
            Field::TotalCharges => {
                self.total_charges.pop();
            }
            _ => {}
        }
    }

    /// Validate the current inputs into a widget record.
    pub fn build_record(&self) -> Result<WidgetRecord, String> {
        let mut problems = Vec::new();

        let mut number = |label: &str, value: &str| -> f64 {
            match value.trim().parse::<f64>() {
                Ok(n) => n,
                Err(_) => {
                    problems.push(format!("{label} '{value}' is not a number"));
                    f64::NAN
                }
            }
        };

        let monthly_charges = number("monthly charges", &self.monthly_charges);
        let total_charges = number("total charges", &self.total_charges);
        if !problems.is_empty() {
            return Err(problems.join("; "));
        }

        Ok(WidgetRecord {
            tenure: f64::from(self.tenure),
            monthly_charges,
            total_charges,
            contract: self.contract,
            internet_service: self.internet_service,
            online_security: self.online_security,
            tech_support: self.tech_support,
        })
    }

    /// Run the model against the current inputs and store the outcome.
    pub fn run_prediction(&mut self, model: &ChurnModel) {
        self.outcome = Some(match self.build_record() {
            Err(problems) => Outcome::Invalid(problems),
            Ok(record) => match model.predict_encoded(&record.to_vector()) {
                Ok(prediction) => Outcome::Prediction {
                    churn: prediction.label == 1,
                    probability: prediction.probability,
                },
                Err(err) => Outcome::Failed(err.to_string()),
            },
        });
    }
}
