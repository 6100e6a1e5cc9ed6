//! # churn-model
//!
//! Artifact loading and inference for a pre-trained customer churn
//! classifier. The model itself is an opaque, externally produced
//! document; this crate deserializes it, validates its input contract,
//! and exposes row-wise `predict` / `predict_proba` operations over
//! either the full 19-field customer schema or the reduced 7-field
//! widget schema.
//!
//! No training, no feature engineering: construct a record, call the
//! model, read the label and probability.

pub mod artifact;
pub mod encoding;
pub mod error;
pub mod frame;
pub mod predictor;
pub mod schema;
pub mod testing;

pub use artifact::{Artifact, ArtifactMeta, Node, Tree};
pub use encoding::{Contract, InternetService, ServiceOption, WidgetRecord};
pub use error::{ModelError, Result};
pub use frame::Frame;
pub use predictor::{ChurnModel, Prediction};
pub use schema::{CustomerRecord, FeatureValue, FieldKind, RawCustomer, FIELDS};
