//! Customer feature schema for the full (19-field) record.
//!
//! The web form collects every field as text; [`RawCustomer`] holds the
//! submitted values and [`RawCustomer::parse`] turns them into a typed
//! [`CustomerRecord`], reporting every invalid numeric field before any
//! inference is attempted.

use serde::Deserialize;

use crate::error::ModelError;

/// Kind of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Categorical,
    Numeric,
}

/// The 19 feature columns, in model input order.
pub const FIELDS: [(&str, FieldKind); 19] = [
    ("gender", FieldKind::Categorical),
    ("SeniorCitizen", FieldKind::Numeric),
    ("Partner", FieldKind::Categorical),
    ("Dependents", FieldKind::Categorical),
    ("tenure", FieldKind::Numeric),
    ("PhoneService", FieldKind::Categorical),
    ("MultipleLines", FieldKind::Categorical),
    ("InternetService", FieldKind::Categorical),
    ("OnlineSecurity", FieldKind::Categorical),
    ("OnlineBackup", FieldKind::Categorical),
    ("DeviceProtection", FieldKind::Categorical),
    ("TechSupport", FieldKind::Categorical),
    ("StreamingTV", FieldKind::Categorical),
    ("StreamingMovies", FieldKind::Categorical),
    ("Contract", FieldKind::Categorical),
    ("PaperlessBilling", FieldKind::Categorical),
    ("PaymentMethod", FieldKind::Categorical),
    ("MonthlyCharges", FieldKind::Numeric),
    ("TotalCharges", FieldKind::Numeric),
];

/// A value for one feature cell.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Text(String),
    Number(f64),
}

/// Raw form submission: every field as submitted, untyped.
///
/// Field names mirror the upstream dataset column names, hence the
/// serde renames.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCustomer {
    pub gender: String,
    #[serde(rename = "SeniorCitizen")]
    pub senior_citizen: String,
    #[serde(rename = "Partner")]
    pub partner: String,
    #[serde(rename = "Dependents")]
    pub dependents: String,
    pub tenure: String,
    #[serde(rename = "PhoneService")]
    pub phone_service: String,
    #[serde(rename = "MultipleLines")]
    pub multiple_lines: String,
    #[serde(rename = "InternetService")]
    pub internet_service: String,
    #[serde(rename = "OnlineSecurity")]
    pub online_security: String,
    #[serde(rename = "OnlineBackup")]
    pub online_backup: String,
    #[serde(rename = "DeviceProtection")]
    pub device_protection: String,
    #[serde(rename = "TechSupport")]
    pub tech_support: String,
    #[serde(rename = "StreamingTV")]
    pub streaming_tv: String,
    #[serde(rename = "StreamingMovies")]
    pub streaming_movies: String,
    #[serde(rename = "Contract")]
    pub contract: String,
    #[serde(rename = "PaperlessBilling")]
    pub paperless_billing: String,
    #[serde(rename = "PaymentMethod")]
    pub payment_method: String,
    #[serde(rename = "MonthlyCharges")]
    pub monthly_charges: String,
    #[serde(rename = "TotalCharges")]
    pub total_charges: String,
}

impl RawCustomer {
    /// Look up a submitted value by its dataset column name.
    pub fn get(&self, field: &str) -> Option<&str> {
        let value = match field {
            "gender" => &self.gender,
            "SeniorCitizen" => &self.senior_citizen,
            "Partner" => &self.partner,
            "Dependents" => &self.dependents,
            "tenure" => &self.tenure,
            "PhoneService" => &self.phone_service,
            "MultipleLines" => &self.multiple_lines,
            "InternetService" => &self.internet_service,
            "OnlineSecurity" => &self.online_security,
            "OnlineBackup" => &self.online_backup,
            "DeviceProtection" => &self.device_protection,
            "TechSupport" => &self.tech_support,
            "StreamingTV" => &self.streaming_tv,
            "StreamingMovies" => &self.streaming_movies,
            "Contract" => &self.contract,
            "PaperlessBilling" => &self.paperless_billing,
            "PaymentMethod" => &self.payment_method,
            "MonthlyCharges" => &self.monthly_charges,
            "TotalCharges" => &self.total_charges,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Validate and type the submission.
    ///
    /// Collects every failed numeric parse instead of stopping at the
    /// first one, so the form can list all problems in one round trip.
    pub fn parse(&self) -> std::result::Result<CustomerRecord, Vec<ModelError>> {
        let mut errors = Vec::new();

        let mut number = |field: &str, value: &str| -> f64 {
            match value.trim().parse::<f64>() {
                Ok(n) => n,
                Err(_) => {
                    errors.push(ModelError::InvalidNumber {
                        feature: field.to_string(),
                        value: value.to_string(),
                    });
                    f64::NAN
                }
            }
        };

        let record = CustomerRecord {
            gender: self.gender.clone(),
            senior_citizen: number("SeniorCitizen", &self.senior_citizen),
            partner: self.partner.clone(),
            dependents: self.dependents.clone(),
            tenure: number("tenure", &self.tenure),
            phone_service: self.phone_service.clone(),
            multiple_lines: self.multiple_lines.clone(),
            internet_service: self.internet_service.clone(),
            online_security: self.online_security.clone(),
            online_backup: self.online_backup.clone(),
            device_protection: self.device_protection.clone(),
            tech_support: self.tech_support.clone(),
            streaming_tv: self.streaming_tv.clone(),
            streaming_movies: self.streaming_movies.clone(),
            contract: self.contract.clone(),
            paperless_billing: self.paperless_billing.clone(),
            payment_method: self.payment_method.clone(),
            monthly_charges: number("MonthlyCharges", &self.monthly_charges),
            total_charges: number("TotalCharges", &self.total_charges),
        };

        if errors.is_empty() {
            Ok(record)
        } else {
            Err(errors)
        }
    }
}

/// One customer, fully typed, in the full 19-field schema.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub gender: String,
    pub senior_citizen: f64,
    pub partner: String,
    pub dependents: String,
    pub tenure: f64,
    pub phone_service: String,
    pub multiple_lines: String,
    pub internet_service: String,
    pub online_security: String,
    pub online_backup: String,
    pub device_protection: String,
    pub tech_support: String,
    pub streaming_tv: String,
    pub streaming_movies: String,
    pub contract: String,
    pub paperless_billing: String,
    pub payment_method: String,
    pub monthly_charges: f64,
    pub total_charges: f64,
}

impl CustomerRecord {
    /// The record as (column name, value) pairs in [`FIELDS`] order.
    pub fn to_row(&self) -> Vec<(&'static str, FeatureValue)> {
        vec![
            ("gender", FeatureValue::Text(self.gender.clone())),
            ("SeniorCitizen", FeatureValue::Number(self.senior_citizen)),
            ("Partner", FeatureValue::Text(self.partner.clone())),
            ("Dependents", FeatureValue::Text(self.dependents.clone())),
            ("tenure", FeatureValue::Number(self.tenure)),
            ("PhoneService", FeatureValue::Text(self.phone_service.clone())),
            ("MultipleLines", FeatureValue::Text(self.multiple_lines.clone())),
            (
                "InternetService",
                FeatureValue::Text(self.internet_service.clone()),
            ),
            (
                "OnlineSecurity",
                FeatureValue::Text(self.online_security.clone()),
            ),
            ("OnlineBackup", FeatureValue::Text(self.online_backup.clone())),
            (
                "DeviceProtection",
                FeatureValue::Text(self.device_protection.clone()),
            ),
            ("TechSupport", FeatureValue::Text(self.tech_support.clone())),
            ("StreamingTV", FeatureValue::Text(self.streaming_tv.clone())),
            (
                "StreamingMovies",
                FeatureValue::Text(self.streaming_movies.clone()),
            ),
            ("Contract", FeatureValue::Text(self.contract.clone())),
            (
                "PaperlessBilling",
                FeatureValue::Text(self.paperless_billing.clone()),
            ),
            (
                "PaymentMethod",
                FeatureValue::Text(self.payment_method.clone()),
            ),
            ("MonthlyCharges", FeatureValue::Number(self.monthly_charges)),
            ("TotalCharges", FeatureValue::Number(self.total_charges)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_raw() -> RawCustomer {
        RawCustomer {
            gender: "Female".into(),
            senior_citizen: "0".into(),
            partner: "Yes".into(),
            dependents: "No".into(),
            tenure: "12".into(),
            phone_service: "Yes".into(),
            multiple_lines: "No".into(),
            internet_service: "Fiber optic".into(),
            online_security: "No".into(),
            online_backup: "Yes".into(),
            device_protection: "No".into(),
            tech_support: "No".into(),
            streaming_tv: "Yes".into(),
            streaming_movies: "No".into(),
            contract: "Month-to-month".into(),
            paperless_billing: "Yes".into(),
            payment_method: "Electronic check".into(),
            monthly_charges: "70.35".into(),
            total_charges: "845.5".into(),
        }
    }

    #[test]
    fn test_fields_count_and_order() {
        assert_eq!(FIELDS.len(), 19);
        assert_eq!(FIELDS[0].0, "gender");
        assert_eq!(FIELDS[18].0, "TotalCharges");
        let numeric: Vec<&str> = FIELDS
            .iter()
            .filter(|(_, kind)| *kind == FieldKind::Numeric)
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(
            numeric,
            vec!["SeniorCitizen", "tenure", "MonthlyCharges", "TotalCharges"]
        );
    }

    #[test]
    fn test_parse_valid_submission() {
        let record = valid_raw().parse().expect("valid submission");
        assert_eq!(record.gender, "Female");
        assert_eq!(record.tenure, 12.0);
        assert_eq!(record.monthly_charges, 70.35);
    }

    #[test]
    fn test_parse_collects_all_numeric_errors() {
        let mut raw = valid_raw();
        raw.tenure = "twelve".into();
        raw.total_charges = "".into();
        let errors = raw.parse().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            &errors[0],
            ModelError::InvalidNumber { feature, .. } if feature == "tenure"
        ));
        assert!(matches!(
            &errors[1],
            ModelError::InvalidNumber { feature, .. } if feature == "TotalCharges"
        ));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let mut raw = valid_raw();
        raw.monthly_charges = " 70.35 ".into();
        let record = raw.parse().expect("whitespace-padded number");
        assert_eq!(record.monthly_charges, 70.35);
    }

    #[test]
    fn test_get_by_column_name() {
        let raw = valid_raw();
        assert_eq!(raw.get("Contract"), Some("Month-to-month"));
        assert_eq!(raw.get("tenure"), Some("12"));
        assert_eq!(raw.get("NotAField"), None);
    }

    #[test]
    fn test_to_row_matches_fields_order() {
        let record = valid_raw().parse().unwrap();
        let row = record.to_row();
        assert_eq!(row.len(), FIELDS.len());
        for ((name, _), (row_name, _)) in FIELDS.iter().zip(row.iter()) {
            assert_eq!(name, row_name);
        }
    }

    #[test]
    fn test_form_deserialization_uses_dataset_names() {
        let body = "gender=Male&SeniorCitizen=1&Partner=No&Dependents=No&tenure=2\
                    &PhoneService=Yes&MultipleLines=No&InternetService=DSL\
                    &OnlineSecurity=Yes&OnlineBackup=No&DeviceProtection=No\
                    &TechSupport=Yes&StreamingTV=No&StreamingMovies=No\
                    &Contract=One+year&PaperlessBilling=No\
                    &PaymentMethod=Mailed+check&MonthlyCharges=53.85&TotalCharges=108.15";
        let raw: RawCustomer = serde_urlencoded::from_str(body).expect("form body");
        assert_eq!(raw.gender, "Male");
        assert_eq!(raw.senior_citizen, "1");
        assert_eq!(raw.contract, "One year");
        assert_eq!(raw.payment_method, "Mailed check");
    }
}
