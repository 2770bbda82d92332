//! Structured events shared by the builders. Field names are stable so log
//! queries can rely on them.

use caren_core::NodeId;

/// A graph finished building.
pub fn graph_built(kind: &str, node_count: usize, edge_count: usize) {
    tracing::info!(
        event = "graph_built",
        kind,
        node_count,
        edge_count,
        "graph built"
    );
}

/// An embedding provider failed and another took over (or none did).
pub fn embedding_degraded(component: &str, failure: &str, fallback_used: Option<&str>) {
    tracing::warn!(
        event = "embedding_degraded",
        component,
        failure,
        fallback_used = fallback_used.unwrap_or("none"),
        "embedding provider degraded"
    );
}

/// A previously degraded provider served a request again.
pub fn embedding_recovered(component: &str) {
    tracing::info!(event = "embedding_recovered", component, "embedding provider recovered");
}

/// A causal edge vanished between iteration and merge.
pub fn stale_edge_dropped(source: NodeId, target: NodeId) {
    tracing::debug!(event = "stale_edge_dropped", source, target, "stale causal edge dropped");
}

/// Community detection finished.
pub fn communities_detected(partitioner: &str, community_count: usize, node_count: usize) {
    tracing::info!(
        event = "communities_detected",
        partitioner,
        community_count,
        node_count,
        "communities detected"
    );
}
