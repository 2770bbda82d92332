pub mod defaults;
mod embedding_config;
mod graph_config;
mod observability_config;
mod weights;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use embedding_config::EmbeddingConfig;
pub use graph_config::GraphConfig;
pub use observability_config::ObservabilityConfig;
pub use weights::{CausalWeights, RstWeights};

/// Top-level configuration. Every section falls back to defaults when omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarenConfig {
    pub graph: GraphConfig,
    pub rst_weights: RstWeights,
    pub causal_weights: CausalWeights,
    pub embedding: EmbeddingConfig,
    pub observability: ObservabilityConfig,
}

impl CarenConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&source)
    }

    /// Reject negative or non-finite thresholds and weights.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("graph.rst_threshold", self.graph.rst_threshold),
            ("graph.causal_threshold", self.graph.causal_threshold),
            ("graph.cluster_resolution", self.graph.cluster_resolution),
        ];
        let weights = self
            .rst_weights
            .entries()
            .into_iter()
            .chain(self.causal_weights.entries());

        for (field, value) in scalars.into_iter().chain(weights) {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}
