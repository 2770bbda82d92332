use serde::{Deserialize, Serialize};

use super::defaults;

/// Edge thresholds and enrichment switches for graph construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Relatedness edges require `score > rst_threshold`.
    pub rst_threshold: f64,
    /// Causal edges require `score >= causal_threshold`.
    pub causal_threshold: f64,
    /// Run community detection over the relatedness graph.
    pub cluster: bool,
    /// Resolution for greedy modularity (higher = more communities).
    pub cluster_resolution: f64,
    /// Use relatedness weights in modularity instead of unit edges.
    pub cluster_weighted: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            rst_threshold: defaults::DEFAULT_RST_THRESHOLD,
            causal_threshold: defaults::DEFAULT_CAUSAL_THRESHOLD,
            cluster: defaults::DEFAULT_CLUSTER_ENABLED,
            cluster_resolution: defaults::DEFAULT_MODULARITY_RESOLUTION,
            cluster_weighted: defaults::DEFAULT_CLUSTER_WEIGHTED,
        }
    }
}
