//! Merge the relatedness and causal graphs into one directed graph.
//!
//! Per ordered pair the edge type only moves forward:
//! absent -> rst | causal, rst -> both. `both` is terminal.

use caren_core::errors::CarenResult;
use caren_core::{EdgeAttrs, Graph, NodeAttrs};
use caren_observability::tracing_setup::events;
use tracing::debug;

/// Build the combined graph.
///
/// 1. Every relatedness node is copied, labelled by its action text or id.
/// 2. Every relatedness edge `(u, v)`, `u < v`, becomes `rst`.
/// 3. Every causal edge `u -> v` still present in `causal` upgrades an
///    existing `(u, v)` to `both`, or is inserted as `causal`. Causal
///    endpoints missing from the relatedness graph are added with their
///    causal-graph label.
pub fn build_combined_graph(rst: &Graph, causal: &Graph) -> CarenResult<Graph> {
    let _span = caren_observability::combine_span!(rst.edge_count(), causal.edge_count()).entered();
    let mut combined = Graph::directed();

    for (id, attrs) in rst.nodes() {
        combined.add_node(
            id,
            NodeAttrs {
                label: attrs.action.clone().unwrap_or_else(|| id.to_string()),
                action: attrs.action.clone(),
                group: attrs.group,
            },
        );
    }

    for (u, v, attrs) in rst.edges() {
        if u >= v {
            continue;
        }
        let Some(weight) = attrs.weight() else {
            debug!(u, v, kind = %attrs.kind(), "relatedness edge without weight skipped");
            continue;
        };
        combined.add_edge(u, v, EdgeAttrs::rst(weight)?)?;
    }

    for (u, v, attrs) in causal.edges() {
        if !causal.contains_edge(u, v) {
            events::stale_edge_dropped(u, v);
            continue;
        }
        let Some(causal_weight) = attrs.causal_weight() else {
            debug!(u, v, kind = %attrs.kind(), "causal edge without causal weight skipped");
            continue;
        };

        for id in [u, v] {
            if !combined.contains_node(id) {
                let attrs = causal
                    .node(id)
                    .cloned()
                    .unwrap_or_else(|| NodeAttrs::for_action(id, None));
                combined.add_node(id, attrs);
            }
        }

        if combined.contains_edge(u, v) {
            combined.upgrade_to_both(u, v, causal_weight)?;
        } else {
            combined.add_edge(u, v, EdgeAttrs::causal(causal_weight)?)?;
        }
    }

    events::graph_built("combined", combined.node_count(), combined.edge_count());
    Ok(combined)
}
