//! Span definitions per pipeline stage: relatedness, causal, combine, clustering.

/// Create a relatedness-graph span.
#[macro_export]
macro_rules! rst_span {
    ($record_count:expr, $threshold:expr) => {
        tracing::info_span!("caren.rst", record_count = $record_count, threshold = $threshold)
    };
}

/// Create a causal-inference span.
#[macro_export]
macro_rules! causal_span {
    ($record_count:expr, $threshold:expr) => {
        tracing::info_span!("caren.causal", record_count = $record_count, threshold = $threshold)
    };
}

/// Create a graph-merge span.
#[macro_export]
macro_rules! combine_span {
    ($rst_edges:expr, $causal_edges:expr) => {
        tracing::info_span!("caren.combine", rst_edges = $rst_edges, causal_edges = $causal_edges)
    };
}

/// Create a community-detection span.
#[macro_export]
macro_rules! clustering_span {
    ($partitioner:expr, $node_count:expr) => {
        tracing::info_span!("caren.clustering", partitioner = %$partitioner, node_count = $node_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RST: &str = "caren.rst";
    pub const CAUSAL: &str = "caren.causal";
    pub const COMBINE: &str = "caren.combine";
    pub const CLUSTERING: &str = "caren.clustering";
}
