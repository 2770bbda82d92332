//! Owned graph model: node id -> attributes, ordered id pair -> edge attributes.
//!
//! Edges refer to nodes by id only, so there are no ownership cycles. Both
//! maps are ordered, which keeps iteration (and anything serialized from it)
//! deterministic.

mod attrs;

use std::collections::BTreeMap;

pub use attrs::{EdgeAttrs, EdgeKind, NodeAttrs, NodeId};

use crate::errors::GraphError;

/// A directed or undirected graph over action-record positions.
///
/// Undirected graphs store every pair as `(min, max)`; lookups canonicalize
/// the same way, so `contains_edge(1, 0)` and `contains_edge(0, 1)` agree.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    directed: bool,
    nodes: BTreeMap<NodeId, NodeAttrs>,
    edges: BTreeMap<(NodeId, NodeId), EdgeAttrs>,
}

impl Graph {
    pub fn directed() -> Self {
        Self {
            directed: true,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    pub fn undirected() -> Self {
        Self {
            directed: false,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    fn key(&self, u: NodeId, v: NodeId) -> (NodeId, NodeId) {
        if self.directed || u < v {
            (u, v)
        } else {
            (v, u)
        }
    }

    /// Insert or replace a node. Returns the previous attributes, if any.
    pub fn add_node(&mut self, id: NodeId, attrs: NodeAttrs) -> Option<NodeAttrs> {
        self.nodes.insert(id, attrs)
    }

    pub fn node(&self, id: NodeId) -> Option<&NodeAttrs> {
        self.nodes.get(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Set the community index on an existing node.
    pub fn set_group(&mut self, id: NodeId, group: usize) -> Result<(), GraphError> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(GraphError::UnknownNode { node: id })?;
        node.group = Some(group);
        Ok(())
    }

    /// Insert or replace an edge. Both endpoints must already be nodes.
    /// Returns the previous attributes, if any.
    pub fn add_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        attrs: EdgeAttrs,
    ) -> Result<Option<EdgeAttrs>, GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        for node in [u, v] {
            if !self.nodes.contains_key(&node) {
                return Err(GraphError::UnknownNode { node });
            }
        }
        let key = self.key(u, v);
        Ok(self.edges.insert(key, attrs))
    }

    pub fn edge(&self, u: NodeId, v: NodeId) -> Option<&EdgeAttrs> {
        self.edges.get(&self.key(u, v))
    }

    pub fn contains_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edges.contains_key(&self.key(u, v))
    }

    /// Upgrade an existing relatedness edge in place to `both`.
    pub fn upgrade_to_both(
        &mut self,
        u: NodeId,
        v: NodeId,
        causal_weight: f64,
    ) -> Result<EdgeAttrs, GraphError> {
        let key = self.key(u, v);
        let current = *self
            .edges
            .get(&key)
            .ok_or(GraphError::MissingEdge {
                source_id: u,
                target_id: v,
            })?;
        let upgraded = current.with_causal(u, v, causal_weight)?;
        self.edges.insert(key, upgraded);
        Ok(upgraded)
    }

    /// Nodes in ascending id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeAttrs)> {
        self.nodes.iter().map(|(&id, attrs)| (id, attrs))
    }

    /// Edges in ascending `(source, target)` order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &EdgeAttrs)> {
        self.edges.iter().map(|(&(u, v), attrs)| (u, v, attrs))
    }

    /// Edges touching `id`, as `(other endpoint, attrs)`.
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &EdgeAttrs)> {
        self.edges.iter().filter_map(move |(&(u, v), attrs)| {
            if u == id {
                Some((v, attrs))
            } else if v == id {
                Some((u, attrs))
            } else {
                None
            }
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
