//! Serialized model artifact format.
//!
//! The artifact is an externally produced JSON document: metadata
//! declaring the input contract, per-feature category encoders, and a
//! tree ensemble whose summed leaf scores pass through a sigmoid to give
//! the positive-class probability.
//!
//! Load-time validation rejects inconsistent documents so that contract
//! violations surface at startup, not mid-request.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

fn default_threshold() -> f32 {
    0.5
}

/// Artifact metadata: the model's declared input contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactMeta {
    /// Feature columns the model expects, in input order.
    pub feature_names: Vec<String>,
    /// Declared feature count; must agree with `feature_names`.
    pub num_features: u32,
    /// Decision threshold on the positive-class probability.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Constant added to the summed leaf scores before the sigmoid.
    #[serde(default)]
    pub base_score: f32,
}

/// A node in a decision tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Split {
        feature: u32,
        threshold: f32,
        left: u32,
        right: u32,
    },
    Leaf {
        value: f32,
    },
}

/// A single decision tree stored as a flat node array.
///
/// Node 0 is the root; child indices must point forward in the array,
/// which rules out cycles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    /// Evaluate the tree against an encoded feature vector.
    ///
    /// A NaN feature value (missing) takes the left branch.
    pub fn score(&self, row: &[f32]) -> f32 {
        let mut idx = 0usize;
        loop {
            match &self.nodes[idx] {
                Node::Leaf { value } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    let value = row[*feature as usize];
                    idx = if value.is_nan() || value < *threshold {
                        *left as usize
                    } else {
                        *right as usize
                    };
                }
            }
        }
    }

    fn validate(&self, tree_idx: usize, num_features: usize) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(ModelError::InvalidArtifact(format!(
                "tree {tree_idx} has no nodes"
            )));
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature as usize >= num_features {
                    return Err(ModelError::InvalidArtifact(format!(
                        "tree {tree_idx} node {idx} splits on feature {feature}, \
                         but the model declares {num_features} features"
                    )));
                }
                for child in [*left, *right] {
                    // Children must come after their parent in the array.
                    if child as usize <= idx || child as usize >= self.nodes.len() {
                        return Err(ModelError::InvalidArtifact(format!(
                            "tree {tree_idx} node {idx} references invalid child {child}"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

/// A deserialized, validated model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artifact {
    pub meta: ArtifactMeta,
    /// Category lists per categorical feature; the code of a category is
    /// its index in the list.
    #[serde(default)]
    pub encoders: BTreeMap<String, Vec<String>>,
    pub trees: Vec<Tree>,
}

impl Artifact {
    /// Load an artifact from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load an artifact from any JSON reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let artifact: Artifact = serde_json::from_reader(reader)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check the artifact's internal consistency.
    pub fn validate(&self) -> Result<()> {
        let declared = self.meta.num_features as usize;
        if declared != self.meta.feature_names.len() {
            return Err(ModelError::InvalidArtifact(format!(
                "num_features is {declared} but {} feature names are declared",
                self.meta.feature_names.len()
            )));
        }
        if self.trees.is_empty() {
            return Err(ModelError::InvalidArtifact("no trees".to_string()));
        }
        if !(0.0..=1.0).contains(&self.meta.threshold) {
            return Err(ModelError::InvalidArtifact(format!(
                "threshold {} is outside [0, 1]",
                self.meta.threshold
            )));
        }
        for name in self.encoders.keys() {
            if !self.meta.feature_names.iter().any(|f| f == name) {
                return Err(ModelError::InvalidArtifact(format!(
                    "encoder for undeclared feature '{name}'"
                )));
            }
        }
        for (idx, tree) in self.trees.iter().enumerate() {
            tree.validate(idx, declared)?;
        }
        Ok(())
    }
}
