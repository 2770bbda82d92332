//! Relatedness (RST) graph: undirected, one node per record with action text.

use caren_core::constants::RST_WEIGHT_PRECISION;
use caren_core::errors::CarenResult;
use caren_core::{ActionRecord, EdgeAttrs, Graph, NodeAttrs};
use caren_observability::tracing_setup::events;
use tracing::trace;

use crate::scoring::{round_to, RelationScorer};

/// Build the relatedness graph.
///
/// Records with blank or missing `A` get no node. Every pair `i < j` of valid
/// records is scored; an edge `(i, j)` is added iff `rst_score > threshold`
/// (strict), weighted `round(score, 2)`.
pub fn build_rst_graph(
    records: &[ActionRecord],
    threshold: f64,
    scorer: &RelationScorer<'_>,
) -> CarenResult<Graph> {
    let _span = caren_observability::rst_span!(records.len(), threshold).entered();
    let mut graph = Graph::undirected();

    let valid: Vec<(usize, &ActionRecord, &str)> = records
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.valid_action().map(|a| (i, r, a)))
        .collect();

    for &(i, _, action) in &valid {
        graph.add_node(i, NodeAttrs::for_action(i, Some(action)));
    }

    for (pos, &(i, record_i, _)) in valid.iter().enumerate() {
        for &(j, record_j, _) in &valid[pos + 1..] {
            let score = scorer.rst_score(record_i, record_j);
            if score > threshold {
                graph.add_edge(i, j, EdgeAttrs::rst(round_to(score, RST_WEIGHT_PRECISION))?)?;
            } else {
                trace!(i, j, score, "relatedness below threshold");
            }
        }
    }

    events::graph_built("rst", graph.node_count(), graph.edge_count());
    Ok(graph)
}
