use caren_core::{EdgeAttrs, EdgeKind, Graph, NodeAttrs};
use proptest::prelude::*;

fn with_nodes(mut g: Graph, n: usize) -> Graph {
    for id in 0..n {
        g.add_node(id, NodeAttrs::for_action(id, Some(&format!("action {id}"))));
    }
    g
}

#[test]
fn upgrade_missing_edge_fails() {
    let mut g = with_nodes(Graph::directed(), 2);
    assert!(g.upgrade_to_both(0, 1, 0.4).is_err());
}

#[test]
fn upgrade_through_undirected_reverse_lookup() {
    let mut g = with_nodes(Graph::undirected(), 2);
    g.add_edge(0, 1, EdgeAttrs::rst(0.42).unwrap()).unwrap();
    let e = g.upgrade_to_both(1, 0, 0.31).unwrap();
    assert_eq!(e.kind(), EdgeKind::Both);
    assert_eq!(g.edge(0, 1).and_then(EdgeAttrs::causal_weight), Some(0.31));
}

proptest! {
    #[test]
    fn undirected_edge_count_ignores_orientation(
        pairs in prop::collection::vec((0usize..8, 0usize..8), 0..40)
    ) {
        let mut g = with_nodes(Graph::undirected(), 8);
        let mut expected = std::collections::BTreeSet::new();
        for (u, v) in pairs {
            if u == v {
                prop_assert!(g.add_edge(u, v, EdgeAttrs::rst(0.5).unwrap()).is_err());
                continue;
            }
            g.add_edge(u, v, EdgeAttrs::rst(0.5).unwrap()).unwrap();
            expected.insert((u.min(v), u.max(v)));
        }
        prop_assert_eq!(g.edge_count(), expected.len());
        for (u, v, _) in g.edges() {
            prop_assert!(u < v);
        }
    }

    #[test]
    fn edges_iterate_in_sorted_order(
        pairs in prop::collection::vec((0usize..6, 0usize..6), 0..30)
    ) {
        let mut g = with_nodes(Graph::directed(), 6);
        for (u, v) in pairs.into_iter().filter(|(u, v)| u != v) {
            g.add_edge(u, v, EdgeAttrs::causal(0.3).unwrap()).unwrap();
        }
        let keys: Vec<(usize, usize)> = g.edges().map(|(u, v, _)| (u, v)).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        prop_assert_eq!(keys, sorted);
    }
}
