//! Weight sets for the two composite scores.
//!
//! The relatedness and causal composites draw on the same four signals but are
//! tuned independently, so they keep separate structs and separate key names.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights for the relatedness composite, keyed `I`, `C`, `S`, `M`.
///
/// The defaults sum to 0.7; the composite is damped, not a probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RstWeights {
    #[serde(rename = "I")]
    pub identity: f64,
    #[serde(rename = "C")]
    pub context: f64,
    #[serde(rename = "S")]
    pub semantic: f64,
    #[serde(rename = "M")]
    pub metadata: f64,
}

impl Default for RstWeights {
    fn default() -> Self {
        Self {
            identity: defaults::DEFAULT_RST_WEIGHT_IDENTITY,
            context: defaults::DEFAULT_RST_WEIGHT_CONTEXT,
            semantic: defaults::DEFAULT_RST_WEIGHT_SEMANTIC,
            metadata: defaults::DEFAULT_RST_WEIGHT_METADATA,
        }
    }
}

impl RstWeights {
    /// `(key, value)` pairs, used for validation and logging.
    pub fn entries(&self) -> [(&'static str, f64); 4] {
        [
            ("rst_weights.I", self.identity),
            ("rst_weights.C", self.context),
            ("rst_weights.S", self.semantic),
            ("rst_weights.M", self.metadata),
        ]
    }
}

/// Weights for the causal composite. The `rst` term feeds the already
/// computed relatedness score back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CausalWeights {
    pub semantic: f64,
    pub context: f64,
    pub metadata: f64,
    pub identity: f64,
    pub rst: f64,
}

impl Default for CausalWeights {
    fn default() -> Self {
        Self {
            semantic: defaults::DEFAULT_CAUSAL_WEIGHT_SEMANTIC,
            context: defaults::DEFAULT_CAUSAL_WEIGHT_CONTEXT,
            metadata: defaults::DEFAULT_CAUSAL_WEIGHT_METADATA,
            identity: defaults::DEFAULT_CAUSAL_WEIGHT_IDENTITY,
            rst: defaults::DEFAULT_CAUSAL_WEIGHT_RST,
        }
    }
}

impl CausalWeights {
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("causal_weights.semantic", self.semantic),
            ("causal_weights.context", self.context),
            ("causal_weights.metadata", self.metadata),
            ("causal_weights.identity", self.identity),
            ("causal_weights.rst", self.rst),
        ]
    }

    pub fn total(&self) -> f64 {
        self.entries().iter().map(|(_, w)| w).sum()
    }
}
