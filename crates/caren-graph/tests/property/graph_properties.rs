//! Property tests for graph construction: thresholds, time order, and the
//! merge rules over randomly generated record sets.

use proptest::prelude::*;

use caren_core::{ActionRecord, EdgeKind};
use caren_embeddings::HashedTfProvider;
use caren_graph::causal::effective_time;
use caren_graph::{build_combined_graph, build_rst_graph, infer_causal_paths, RelationScorer};

const ACTIONS: [&str; 7] = [
    "unlock door",
    "open door",
    "close door",
    "order coffee",
    "pay for coffee",
    "",
    "   ",
];
const CONTEXTS: [&str; 3] = ["front entrance", "cafe counter", "parking lot"];

fn record_strategy() -> impl Strategy<Value = ActionRecord> {
    (
        0..ACTIONS.len(),
        prop::option::of(0u32..20),
        prop::option::of(0..CONTEXTS.len()),
        prop::option::of(0u8..3),
    )
        .prop_map(|(a, second, ctx, dev)| ActionRecord {
            action: Some(ACTIONS[a].to_string()),
            action_time: second.map(|s| format!("2024-01-01T10:00:{s:02}")),
            source_time: None,
            identity: dev.map(|d| format!("dev{d}")),
            context: ctx.map(|c| CONTEXTS[c].to_string()),
            metadata: None,
        })
}

fn records_strategy() -> impl Strategy<Value = Vec<ActionRecord>> {
    prop::collection::vec(record_strategy(), 0..10)
}

proptest! {
    #[test]
    fn rst_edges_exactly_above_threshold(
        records in records_strategy(),
        threshold in 0.0_f64..0.6,
    ) {
        let embedder = HashedTfProvider::new(32);
        let scorer = RelationScorer::new(&embedder);
        let rst = build_rst_graph(&records, threshold, &scorer).unwrap();

        for i in 0..records.len() {
            for j in (i + 1)..records.len() {
                if !rst.contains_node(i) || !rst.contains_node(j) {
                    prop_assert!(!rst.contains_edge(i, j));
                    continue;
                }
                let score = scorer.rst_score(&records[i], &records[j]);
                prop_assert_eq!(rst.contains_edge(i, j), score > threshold);
            }
        }
    }

    #[test]
    fn blank_actions_never_in_rst(records in records_strategy()) {
        let embedder = HashedTfProvider::new(32);
        let scorer = RelationScorer::new(&embedder);
        let rst = build_rst_graph(&records, 0.0, &scorer).unwrap();

        for (i, record) in records.iter().enumerate() {
            prop_assert_eq!(rst.contains_node(i), record.has_valid_action());
        }
    }

    #[test]
    fn causal_edges_follow_time_and_inclusive_threshold(
        records in records_strategy(),
        threshold in 0.0_f64..0.6,
    ) {
        let embedder = HashedTfProvider::new(32);
        let scorer = RelationScorer::new(&embedder);
        let causal = infer_causal_paths(&records, threshold, &scorer).unwrap();
        prop_assert_eq!(causal.node_count(), records.len());

        for i in 0..records.len() {
            for j in 0..records.len() {
                if i == j {
                    continue;
                }
                let ordered = match (effective_time(&records[i]), effective_time(&records[j])) {
                    (Some(ti), Some(tj)) => ti < tj,
                    _ => false,
                };
                let expected =
                    ordered && scorer.score_pair(&records[i], &records[j]).causal >= threshold;
                prop_assert_eq!(causal.contains_edge(i, j), expected);
                prop_assert!(!(causal.contains_edge(i, j) && causal.contains_edge(j, i)));
            }
        }
    }

    #[test]
    fn combined_is_typed_union(records in records_strategy()) {
        let embedder = HashedTfProvider::new(32);
        let scorer = RelationScorer::new(&embedder);
        let rst = build_rst_graph(&records, 0.1, &scorer).unwrap();
        let causal = infer_causal_paths(&records, 0.1, &scorer).unwrap();
        let combined = build_combined_graph(&rst, &causal).unwrap();

        for (u, v, attrs) in combined.edges() {
            let in_rst = u < v && rst.contains_edge(u, v);
            let in_causal = causal.contains_edge(u, v);
            let expected = match (in_rst, in_causal) {
                (true, true) => Some(EdgeKind::Both),
                (true, false) => Some(EdgeKind::Rst),
                (false, true) => Some(EdgeKind::Causal),
                (false, false) => None,
            };
            prop_assert_eq!(Some(attrs.kind()), expected);
        }

        for (u, v, _) in rst.edges() {
            prop_assert!(combined.contains_edge(u, v));
        }
        for (u, v, _) in causal.edges() {
            prop_assert!(combined.contains_edge(u, v));
        }
    }

    #[test]
    fn construction_is_deterministic(records in records_strategy()) {
        let embedder = HashedTfProvider::new(32);
        let scorer = RelationScorer::new(&embedder);
        let first = build_rst_graph(&records, 0.2, &scorer).unwrap();
        let second = build_rst_graph(&records, 0.2, &scorer).unwrap();
        prop_assert_eq!(first, second);
    }
}
