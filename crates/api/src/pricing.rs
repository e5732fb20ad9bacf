// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rental price estimation.
//!
//! The [`PricingModel`] trait hides the regression model behind a single
//! `predict` call. [`TreeEnsemble`] is the bundled implementation: a
//! gradient-boosted tree ensemble read from a JSON artifact.
//!
//! # Artifact format
//!
//! ```json
//! {
//!   "base_score": 100.0,
//!   "trees": [
//!     { "nodes": [
//!       { "feature": "engine_power", "threshold": 150.0, "yes": 1, "no": 2 },
//!       { "leaf": -10.0 },
//!       { "leaf": 12.5 }
//!     ] }
//!   ]
//! }
//! ```
//!
//! A split sends the car to `yes` when its feature value is below the
//! threshold and to `no` otherwise. Node 0 is the root of every tree.
//! Categorical features are one-hot encoded under the name `field=value`
//! (`fuel=diesel`, `model_key=BMW`) and boolean flags read as 1.0 or 0.0.

use rental_insights_domain::{CarFeatures, CarType, DomainError, Fuel, ModelKey, PaintColor};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Pricing model errors.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The artifact file could not be read.
    #[error("Failed to read model file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid JSON for the expected layout.
    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// The ensemble has no trees.
    #[error("Model artifact contains no trees")]
    EmptyEnsemble,

    /// A tree has no nodes.
    #[error("Tree {tree} has no nodes")]
    EmptyTree { tree: usize },

    /// A split points to a child that is out of range or not after it.
    #[error("Tree {tree} node {node} points to child {child}, which must be after it and below {node_count}")]
    InvalidChild {
        tree: usize,
        node: usize,
        child: usize,
        node_count: usize,
    },

    /// A split uses a feature the model cannot compute.
    #[error("Tree {tree} node {node} uses unknown feature '{feature}'")]
    UnknownFeature {
        tree: usize,
        node: usize,
        feature: String,
    },

    /// A threshold or leaf value is NaN or infinite.
    #[error("Tree {tree} node {node} holds a non-finite value")]
    NonFiniteValue { tree: usize, node: usize },

    /// The base score is NaN or infinite.
    #[error("Model base score must be finite")]
    NonFiniteBaseScore,

    /// The car features cannot be evaluated.
    #[error(transparent)]
    InvalidFeatures(#[from] DomainError),
}

/// A model that estimates the daily rental price of a car.
///
/// Implementations are loaded once and shared between request handlers.
pub trait PricingModel: Send + Sync {
    /// Estimates the daily rental price for a car.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidFeatures` if a derived feature cannot be
    /// computed from the input.
    fn predict(&self, features: &CarFeatures) -> Result<f64, ModelError>;
}

/// Serialized form of a tree ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Constant added to the sum of leaf values.
    pub base_score: f64,
    /// The trees of the ensemble.
    pub trees: Vec<TreeArtifact>,
}

/// Serialized form of one tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeArtifact {
    /// The nodes, root first.
    pub nodes: Vec<NodeArtifact>,
}

/// Serialized form of one tree node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeArtifact {
    /// An internal node.
    Split {
        /// Feature name.
        feature: String,
        /// Split point.
        threshold: f64,
        /// Child index taken when the value is below the threshold.
        yes: usize,
        /// Child index taken otherwise.
        no: usize,
    },
    /// A terminal node.
    Leaf {
        /// Contribution to the prediction.
        leaf: f64,
    },
}

/// A model input, resolved from its name at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Feature {
    Mileage,
    EnginePower,
    MileageInverse,
    Flag(usize),
    ModelKey(ModelKey),
    Fuel(Fuel),
    PaintColor(PaintColor),
    CarType(CarType),
}

impl Feature {
    /// Resolves a feature name, or returns `None` if it is unknown.
    fn resolve(name: &str) -> Option<Self> {
        match name {
            "mileage" => return Some(Self::Mileage),
            "engine_power" => return Some(Self::EnginePower),
            "mileage_inverse" => return Some(Self::MileageInverse),
            _ => {}
        }

        if let Some((field, value)) = name.split_once('=') {
            return match field {
                "model_key" => ModelKey::from_str(value).ok().map(Self::ModelKey),
                "fuel" => Fuel::from_str(value).ok().map(Self::Fuel),
                "paint_color" => PaintColor::from_str(value).ok().map(Self::PaintColor),
                "car_type" => CarType::from_str(value).ok().map(Self::CarType),
                _ => None,
            };
        }

        CarFeatures::default()
            .flags()
            .iter()
            .position(|(flag, _)| *flag == name)
            .map(Self::Flag)
    }

    #[allow(clippy::cast_precision_loss)]
    fn value(self, features: &CarFeatures, mileage_inverse: f64) -> f64 {
        let one_hot = |hit: bool| -> f64 { f64::from(u8::from(hit)) };
        match self {
            Self::Mileage => features.mileage as f64,
            Self::EnginePower => features.engine_power as f64,
            Self::MileageInverse => mileage_inverse,
            Self::Flag(position) => one_hot(
                features
                    .flags()
                    .get(position)
                    .is_some_and(|(_, set)| *set),
            ),
            Self::ModelKey(key) => one_hot(features.model_key == key),
            Self::Fuel(fuel) => one_hot(features.fuel == fuel),
            Self::PaintColor(color) => one_hot(features.paint_color == color),
            Self::CarType(car_type) => one_hot(features.car_type == car_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf(f64),
    Split {
        feature: Feature,
        threshold: f64,
        yes: usize,
        no: usize,
    },
}

/// A validated tree ensemble.
///
/// Every tree is non-empty and every split points forward to a node of the
/// same tree, so evaluation always terminates on a leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeEnsemble {
    base_score: f64,
    trees: Vec<Vec<Node>>,
}

impl TreeEnsemble {
    /// Validates an artifact and resolves its feature names.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the ensemble or one of its trees is empty
    /// - a child index is out of range or does not come after its parent
    /// - a feature name is unknown
    /// - a value is not finite
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        if !artifact.base_score.is_finite() {
            return Err(ModelError::NonFiniteBaseScore);
        }
        if artifact.trees.is_empty() {
            return Err(ModelError::EmptyEnsemble);
        }

        let mut trees: Vec<Vec<Node>> = Vec::with_capacity(artifact.trees.len());
        for (tree, tree_artifact) in artifact.trees.into_iter().enumerate() {
            let node_count: usize = tree_artifact.nodes.len();
            if node_count == 0 {
                return Err(ModelError::EmptyTree { tree });
            }

            let mut nodes: Vec<Node> = Vec::with_capacity(node_count);
            for (node, node_artifact) in tree_artifact.nodes.into_iter().enumerate() {
                let compiled: Node = match node_artifact {
                    NodeArtifact::Leaf { leaf } => {
                        if !leaf.is_finite() {
                            return Err(ModelError::NonFiniteValue { tree, node });
                        }
                        Node::Leaf(leaf)
                    }
                    NodeArtifact::Split {
                        feature,
                        threshold,
                        yes,
                        no,
                    } => {
                        if !threshold.is_finite() {
                            return Err(ModelError::NonFiniteValue { tree, node });
                        }
                        for child in [yes, no] {
                            if child <= node || child >= node_count {
                                return Err(ModelError::InvalidChild {
                                    tree,
                                    node,
                                    child,
                                    node_count,
                                });
                            }
                        }
                        let Some(resolved) = Feature::resolve(&feature) else {
                            return Err(ModelError::UnknownFeature {
                                tree,
                                node,
                                feature,
                            });
                        };
                        Node::Split {
                            feature: resolved,
                            threshold,
                            yes,
                            no,
                        }
                    }
                };
                nodes.push(compiled);
            }
            trees.push(nodes);
        }

        Ok(Self {
            base_score: artifact.base_score,
            trees,
        })
    }

    /// Parses and validates a JSON artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the artifact is invalid.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(json)?;
        Self::from_artifact(artifact)
    }

    /// Reads, parses and validates a JSON artifact file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the artifact file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the artifact is invalid.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let json: String = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let ensemble: Self = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            trees = ensemble.tree_count(),
            "Loaded pricing model"
        );
        Ok(ensemble)
    }

    /// Returns the number of trees.
    #[must_use]
    pub const fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Returns the constant added to every prediction.
    #[must_use]
    pub const fn base_score(&self) -> f64 {
        self.base_score
    }
}

/// Follows splits from the root to a leaf.
fn evaluate_tree(nodes: &[Node], features: &CarFeatures, mileage_inverse: f64) -> f64 {
    let mut position: usize = 0;
    loop {
        match &nodes[position] {
            Node::Leaf(value) => return *value,
            Node::Split {
                feature,
                threshold,
                yes,
                no,
            } => {
                position = if feature.value(features, mileage_inverse) < *threshold {
                    *yes
                } else {
                    *no
                };
            }
        }
    }
}

impl PricingModel for TreeEnsemble {
    fn predict(&self, features: &CarFeatures) -> Result<f64, ModelError> {
        let mileage_inverse: f64 = features.mileage_inverse()?;
        let total: f64 = self
            .trees
            .iter()
            .map(|nodes| evaluate_tree(nodes, features, mileage_inverse))
            .sum();
        Ok(self.base_score + total)
    }
}
