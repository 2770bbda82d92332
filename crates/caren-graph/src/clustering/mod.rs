//! Community enrichment: write a partition index into each node's `group`.

mod greedy_modularity;

use std::collections::BTreeSet;

use caren_core::errors::{CarenResult, GraphError};
use caren_core::traits::IGraphPartitioner;
use caren_core::{Graph, NodeId};
use caren_observability::tracing_setup::events;

pub use greedy_modularity::GreedyModularity;

/// Partition `graph` and set `group` on every node to its community index.
/// Edges are untouched. Returns the number of communities.
///
/// Fails with `InvalidPartition` if the partitioner's output overlaps,
/// misses a node, or names a node the graph doesn't have.
pub fn annotate_groups(graph: &mut Graph, partitioner: &dyn IGraphPartitioner) -> CarenResult<usize> {
    let _span = caren_observability::clustering_span!(partitioner.name(), graph.node_count()).entered();
    let communities = partitioner.partition(graph)?;
    validate_partition(graph, &communities)?;

    for (group, members) in communities.iter().enumerate() {
        for &id in members {
            graph.set_group(id, group)?;
        }
    }

    events::communities_detected(partitioner.name(), communities.len(), graph.node_count());
    Ok(communities.len())
}

fn validate_partition(graph: &Graph, communities: &[BTreeSet<NodeId>]) -> Result<(), GraphError> {
    let mut seen = BTreeSet::new();
    for &id in communities.iter().flatten() {
        if !graph.contains_node(id) {
            return Err(GraphError::InvalidPartition {
                reason: format!("node {id} is not in the graph"),
            });
        }
        if !seen.insert(id) {
            return Err(GraphError::InvalidPartition {
                reason: format!("node {id} appears in more than one community"),
            });
        }
    }
    if seen.len() != graph.node_count() {
        return Err(GraphError::InvalidPartition {
            reason: format!(
                "{} of {} nodes covered",
                seen.len(),
                graph.node_count()
            ),
        });
    }
    Ok(())
}
