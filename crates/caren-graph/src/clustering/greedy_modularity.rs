//! Greedy modularity maximization (Clauset-Newman-Moore).
//!
//! Start with one community per node and repeatedly merge the connected pair
//! with the largest modularity gain until no merge improves modularity.
//! Ties go to the pair whose smallest members are smallest, so the result is
//! deterministic.

use std::collections::{BTreeMap, BTreeSet};

use caren_core::config::GraphConfig;
use caren_core::errors::CarenResult;
use caren_core::traits::IGraphPartitioner;
use caren_core::{Graph, NodeId};

#[derive(Debug, Clone)]
pub struct GreedyModularity {
    /// Higher values favour smaller communities.
    pub resolution: f64,
    /// Use the strongest edge weight instead of 1.0 per edge.
    pub weighted: bool,
}

impl Default for GreedyModularity {
    fn default() -> Self {
        Self {
            resolution: 1.0,
            weighted: false,
        }
    }
}

struct Community {
    members: BTreeSet<NodeId>,
    /// Sum of member degrees.
    degree: f64,
}

impl GreedyModularity {
    pub fn from_config(config: &GraphConfig) -> Self {
        Self {
            resolution: config.cluster_resolution,
            weighted: config.cluster_weighted,
        }
    }

    fn communities(&self, graph: &Graph) -> Vec<BTreeSet<NodeId>> {
        let index: BTreeMap<NodeId, usize> =
            graph.nodes().enumerate().map(|(i, (id, _))| (id, i)).collect();

        let mut communities: Vec<Option<Community>> = graph
            .nodes()
            .map(|(id, _)| {
                Some(Community {
                    members: BTreeSet::from([id]),
                    degree: 0.0,
                })
            })
            .collect();

        // Symmetric inter-community weights, keyed (low, high) by community slot.
        let mut between: BTreeMap<(usize, usize), f64> = BTreeMap::new();
        let mut total = 0.0;
        for (u, v, attrs) in graph.edges() {
            let (Some(&a), Some(&b)) = (index.get(&u), index.get(&v)) else {
                continue;
            };
            let w = if self.weighted { attrs.strength() } else { 1.0 };
            if w <= 0.0 {
                continue;
            }
            total += w;
            for slot in [a, b] {
                if let Some(c) = communities[slot].as_mut() {
                    c.degree += w;
                }
            }
            *between.entry((a.min(b), a.max(b))).or_default() += w;
        }

        if total > 0.0 {
            while let Some((a, b)) = self.best_merge(&communities, &between, total) {
                merge(&mut communities, &mut between, a, b);
            }
        }

        let mut out: Vec<BTreeSet<NodeId>> =
            communities.into_iter().flatten().map(|c| c.members).collect();
        out.sort_by(|x, y| y.len().cmp(&x.len()).then_with(|| x.first().cmp(&y.first())));
        out
    }

    /// Connected pair with the largest positive gain.
    fn best_merge(
        &self,
        communities: &[Option<Community>],
        between: &BTreeMap<(usize, usize), f64>,
        m: f64,
    ) -> Option<(usize, usize)> {
        let mut best: Option<(f64, (NodeId, NodeId), (usize, usize))> = None;
        for (&(a, b), &w) in between {
            let (Some(ca), Some(cb)) = (&communities[a], &communities[b]) else {
                continue;
            };
            // dQ = 2 * (e_ab - resolution * a_a * a_b), e_ab = w / 2m, a_x = d_x / 2m.
            let gain = w / m - self.resolution * ca.degree * cb.degree / (2.0 * m * m);
            if gain <= 0.0 {
                continue;
            }
            let key = tie_key(ca, cb);
            let better = match &best {
                None => true,
                Some((g, k, _)) => gain > *g || (gain == *g && key < *k),
            };
            if better {
                best = Some((gain, key, (a, b)));
            }
        }
        best.map(|(_, _, pair)| pair)
    }
}

fn tie_key(a: &Community, b: &Community) -> (NodeId, NodeId) {
    let x = a.members.first().copied().unwrap_or(NodeId::MAX);
    let y = b.members.first().copied().unwrap_or(NodeId::MAX);
    (x.min(y), x.max(y))
}

/// Fold community `b` into `a` (`a < b`).
fn merge(
    communities: &mut [Option<Community>],
    between: &mut BTreeMap<(usize, usize), f64>,
    a: usize,
    b: usize,
) {
    let Some(absorbed) = communities[b].take() else {
        return;
    };
    if let Some(target) = communities[a].as_mut() {
        target.members.extend(absorbed.members);
        target.degree += absorbed.degree;
    }

    let touching: Vec<((usize, usize), f64)> = between
        .iter()
        .filter(|(key, _)| key.0 == b || key.1 == b)
        .map(|(&k, &w)| (k, w))
        .collect();
    for (key, w) in touching {
        between.remove(&key);
        let other = if key.0 == b { key.1 } else { key.0 };
        if other == a {
            continue;
        }
        *between.entry((a.min(other), a.max(other))).or_default() += w;
    }
}

impl IGraphPartitioner for GreedyModularity {
    fn partition(&self, graph: &Graph) -> CarenResult<Vec<BTreeSet<NodeId>>> {
        Ok(self.communities(graph))
    }

    fn name(&self) -> &str {
        "greedy_modularity"
    }
}
