use crate::graph::{EdgeKind, NodeId};

/// Graph construction errors.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("self loop rejected on node {node}")]
    SelfLoop { node: NodeId },

    #[error("unknown node: {node}")]
    UnknownNode { node: NodeId },

    #[error("no edge ({source_id}, {target_id})")]
    MissingEdge { source_id: NodeId, target_id: NodeId },

    #[error("invalid edge weight {value} for field {field}")]
    InvalidWeight { field: &'static str, value: f64 },

    #[error("edge ({source_id}, {target_id}) cannot move from {from} to {to}")]
    InvalidTransition {
        source_id: NodeId,
        target_id: NodeId,
        from: EdgeKind,
        to: EdgeKind,
    },

    #[error("invalid partition: {reason}")]
    InvalidPartition { reason: String },
}
