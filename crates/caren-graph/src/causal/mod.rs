//! Causal graph: directed, earlier action to later action.

pub mod timestamp;

use caren_core::constants::CAUSAL_WEIGHT_PRECISION;
use caren_core::errors::CarenResult;
use caren_core::{ActionRecord, EdgeAttrs, Graph, NodeAttrs};
use caren_observability::tracing_setup::events;
use tracing::{debug, trace};

use crate::scoring::{round_to, RelationScorer};

pub use timestamp::{effective_time, parse_timestamp};

/// Build the causal graph.
///
/// Every record becomes a node, whether or not it has action text or a
/// usable time. For each ordered pair `i != j` with both effective times
/// present and `time(i) < time(j)`, an edge `i -> j` is added iff
/// `causal_score >= threshold` (inclusive), weighted `round(score, 3)`.
/// Equal times produce no edge in either direction.
pub fn infer_causal_paths(
    records: &[ActionRecord],
    threshold: f64,
    scorer: &RelationScorer<'_>,
) -> CarenResult<Graph> {
    let _span = caren_observability::causal_span!(records.len(), threshold).entered();
    let mut graph = Graph::directed();

    let times: Vec<_> = records.iter().map(effective_time).collect();
    for (i, record) in records.iter().enumerate() {
        graph.add_node(i, NodeAttrs::for_action(i, record.valid_action()));
    }

    let untimed = times.iter().filter(|t| t.is_none()).count();
    if untimed > 0 {
        debug!(untimed, "records without a usable time take no causal edges");
    }

    for (i, record_i) in records.iter().enumerate() {
        for (j, record_j) in records.iter().enumerate() {
            if i == j {
                continue;
            }
            let (Some(ti), Some(tj)) = (times[i], times[j]) else {
                continue;
            };
            if ti >= tj {
                continue;
            }

            let score = scorer.score_pair(record_i, record_j).causal;
            if score >= threshold {
                let weight = round_to(score, CAUSAL_WEIGHT_PRECISION);
                graph.add_edge(i, j, EdgeAttrs::causal(weight)?)?;
            } else {
                trace!(i, j, score, "causal score below threshold");
            }
        }
    }

    events::graph_built("causal", graph.node_count(), graph.edge_count());
    Ok(graph)
}
