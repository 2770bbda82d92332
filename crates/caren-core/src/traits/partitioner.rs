use std::collections::BTreeSet;

use crate::errors::CarenResult;
use crate::graph::{Graph, NodeId};

/// Community detection over a finished graph.
///
/// Implementations return disjoint sets that together cover every node. The
/// position of a set in the returned list becomes the node's `group`.
pub trait IGraphPartitioner: Send + Sync {
    fn partition(&self, graph: &Graph) -> CarenResult<Vec<BTreeSet<NodeId>>>;

    fn name(&self) -> &str;
}
