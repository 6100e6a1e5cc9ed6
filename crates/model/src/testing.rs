//! Hand-built fixture artifacts for tests.
//!
//! Both fixtures follow the same rule of thumb so test expectations stay
//! readable: short tenure and a month-to-month contract push toward
//! churn, long tenure and a longer contract push away from it.

use std::collections::BTreeMap;

use crate::artifact::{Artifact, ArtifactMeta, Node, Tree};
use crate::schema::CustomerRecord;

fn stump(feature: u32, threshold: f32, low: f32, high: f32) -> Tree {
    Tree {
        nodes: vec![
            Node::Split {
                feature,
                threshold,
                left: 1,
                right: 2,
            },
            Node::Leaf { value: low },
            Node::Leaf { value: high },
        ],
    }
}

/// A 19-feature artifact matching the full customer schema, with
/// encoders for every categorical column.
pub fn full_artifact() -> Artifact {
    let mut encoders = BTreeMap::new();
    let yes_no = vec!["No".to_string(), "Yes".to_string()];
    let internet_option = vec![
        "No".to_string(),
        "No internet service".to_string(),
        "Yes".to_string(),
    ];

    encoders.insert(
        "gender".to_string(),
        vec!["Female".to_string(), "Male".to_string()],
    );
    encoders.insert("Partner".to_string(), yes_no.clone());
    encoders.insert("Dependents".to_string(), yes_no.clone());
    encoders.insert("PhoneService".to_string(), yes_no.clone());
    encoders.insert(
        "MultipleLines".to_string(),
        vec![
            "No".to_string(),
            "No phone service".to_string(),
            "Yes".to_string(),
        ],
    );
    encoders.insert(
        "InternetService".to_string(),
        vec![
            "DSL".to_string(),
            "Fiber optic".to_string(),
            "No".to_string(),
        ],
    );
    encoders.insert("OnlineSecurity".to_string(), internet_option.clone());
    encoders.insert("OnlineBackup".to_string(), internet_option.clone());
    encoders.insert("DeviceProtection".to_string(), internet_option.clone());
    encoders.insert("TechSupport".to_string(), internet_option.clone());
    encoders.insert("StreamingTV".to_string(), internet_option.clone());
    encoders.insert("StreamingMovies".to_string(), internet_option);
    encoders.insert(
        "Contract".to_string(),
        vec![
            "Month-to-month".to_string(),
            "One year".to_string(),
            "Two year".to_string(),
        ],
    );
    encoders.insert("PaperlessBilling".to_string(), yes_no);
    encoders.insert(
        "PaymentMethod".to_string(),
        vec![
            "Bank transfer (automatic)".to_string(),
            "Credit card (automatic)".to_string(),
            "Electronic check".to_string(),
            "Mailed check".to_string(),
        ],
    );

    Artifact {
        meta: ArtifactMeta {
            feature_names: crate::schema::FIELDS
                .iter()
                .map(|(name, _)| name.to_string())
                .collect(),
            num_features: 19,
            threshold: 0.5,
            base_score: 0.0,
        },
        encoders,
        trees: vec![
            // tenure is feature 4, Contract is feature 14.
            stump(4, 12.0, 2.0, -2.0),
            stump(14, 0.5, 0.5, -0.5),
        ],
    }
}

/// A 7-feature artifact matching the reduced widget schema (bare
/// positional vector, no encoders).
pub fn reduced_artifact() -> Artifact {
    Artifact {
        meta: ArtifactMeta {
            feature_names: [
                "tenure",
                "MonthlyCharges",
                "TotalCharges",
                "Contract",
                "InternetService",
                "OnlineSecurity",
                "TechSupport",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            num_features: 7,
            threshold: 0.5,
            base_score: 0.0,
        },
        encoders: BTreeMap::new(),
        trees: vec![stump(0, 12.0, 2.0, -2.0), stump(3, 0.5, 0.5, -0.5)],
    }
}

/// A fully populated, valid customer record.
pub fn valid_record() -> CustomerRecord {
    CustomerRecord {
        gender: "Female".into(),
        senior_citizen: 0.0,
        partner: "Yes".into(),
        dependents: "No".into(),
        tenure: 12.0,
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
        monthly_charges: 70.35,
        total_charges: 845.5,
    }
}
