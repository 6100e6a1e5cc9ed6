//! High-level model wrapper for inference.
//!
//! [`ChurnModel`] wraps a validated [`Artifact`] and exposes the two
//! operations both front-ends rely on: `predict` (labels) and
//! `predict_proba` (two-column probability rows). All call sites go
//! through the same encode-and-score path, so a fixed input always
//! yields the same output.

use std::path::Path;

use crate::artifact::Artifact;
use crate::error::{ModelError, Result};
use crate::frame::Frame;
use crate::schema::{CustomerRecord, FeatureValue};

/// Logistic transform from summed leaf scores to a probability.
pub fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// One prediction: binary label plus positive-class probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// 1 = churn, 0 = no churn.
    pub label: u8,
    /// Probability of the positive (churn) class.
    pub probability: f32,
}

/// A loaded churn classifier.
#[derive(Debug, Clone)]
pub struct ChurnModel {
    artifact: Artifact,
}

impl ChurnModel {
    /// Load and validate a model artifact from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(ChurnModel {
            artifact: Artifact::load(path)?,
        })
    }

    /// Wrap an artifact, validating its contract.
    pub fn from_artifact(artifact: Artifact) -> Result<Self> {
        artifact.validate()?;
        Ok(ChurnModel { artifact })
    }

    /// Number of features the model expects.
    pub fn num_features(&self) -> usize {
        self.artifact.meta.num_features as usize
    }

    /// Feature columns the model expects, in input order.
    pub fn feature_names(&self) -> &[String] {
        &self.artifact.meta.feature_names
    }

    /// Decision threshold on the positive-class probability.
    pub fn threshold(&self) -> f32 {
        self.artifact.meta.threshold
    }

    fn score_encoded(&self, row: &[f32]) -> Prediction {
        let mut margin = self.artifact.meta.base_score;
        for tree in &self.artifact.trees {
            margin += tree.score(row);
        }
        let probability = sigmoid(margin);
        Prediction {
            label: u8::from(probability >= self.artifact.meta.threshold),
            probability,
        }
    }

    /// Predict from an already-encoded positional vector (widget path).
    pub fn predict_encoded(&self, row: &[f32]) -> Result<Prediction> {
        if row.len() != self.num_features() {
            return Err(ModelError::FeatureCountMismatch {
                expected: self.num_features(),
                actual: row.len(),
            });
        }
        Ok(self.score_encoded(row))
    }

    /// Encode one categorical cell through the artifact's encoder.
    fn encode_category(&self, feature: &str, value: &str) -> Result<f32> {
        let categories = &self.artifact.encoders[feature];
        categories
            .iter()
            .position(|c| c == value)
            .map(|idx| idx as f32)
            .ok_or_else(|| ModelError::UnknownCategory {
                feature: feature.to_string(),
                value: value.to_string(),
            })
    }

    fn encode_cell(&self, feature: &str, value: &str) -> Result<f32> {
        if self.artifact.encoders.contains_key(feature) {
            self.encode_category(feature, value)
        } else {
            value
                .trim()
                .parse::<f32>()
                .map_err(|_| ModelError::InvalidNumber {
                    feature: feature.to_string(),
                    value: value.to_string(),
                })
        }
    }

    /// Encode a typed record into the model's feature vector.
    fn encode_record(&self, record: &CustomerRecord) -> Result<Vec<f32>> {
        let row = record.to_row();
        let mut encoded = Vec::with_capacity(self.num_features());
        for name in self.feature_names() {
            let (_, value) = row
                .iter()
                .find(|(field, _)| *field == name.as_str())
                .ok_or_else(|| ModelError::MissingColumn(name.clone()))?;
            let cell = match value {
                FeatureValue::Number(n) => *n as f32,
                FeatureValue::Text(text) => self.encode_cell(name, text)?,
            };
            encoded.push(cell);
        }
        Ok(encoded)
    }

    /// Predict for a single typed record.
    pub fn predict_record(&self, record: &CustomerRecord) -> Result<Prediction> {
        let encoded = self.encode_record(record)?;
        Ok(self.score_encoded(&encoded))
    }

    /// Predict across every row of a CSV frame.
    ///
    /// The model selects its declared feature columns by header name;
    /// extra columns are ignored. All-or-nothing: the first bad cell
    /// fails the whole batch.
    pub fn predict_frame(&self, frame: &Frame) -> Result<Vec<Prediction>> {
        let mut columns = Vec::with_capacity(self.num_features());
        for name in self.feature_names() {
            let idx = frame
                .column_index(name)
                .ok_or_else(|| ModelError::MissingColumn(name.clone()))?;
            columns.push((name.as_str(), idx));
        }

        let mut predictions = Vec::with_capacity(frame.len());
        let mut encoded = vec![0.0f32; self.num_features()];
        for row in 0..frame.len() {
            for (slot, (name, col)) in columns.iter().enumerate() {
                encoded[slot] = self.encode_cell(name, frame.cell(row, *col))?;
            }
            predictions.push(self.score_encoded(&encoded));
        }
        Ok(predictions)
    }

    /// Labels for every row of a frame (0 = no churn, 1 = churn).
    pub fn predict(&self, frame: &Frame) -> Result<Vec<u8>> {
        Ok(self
            .predict_frame(frame)?
            .into_iter()
            .map(|p| p.label)
            .collect())
    }

    /// Two-column probability rows `[no-churn, churn]` for every row.
    pub fn predict_proba(&self, frame: &Frame) -> Result<Vec<[f32; 2]>> {
        Ok(self
            .predict_frame(frame)?
            .into_iter()
            .map(|p| [1.0 - p.probability, p.probability])
            .collect())
    }
}
