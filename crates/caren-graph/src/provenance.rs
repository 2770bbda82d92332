//! Provenance graph: who, where and when for every extracted action.
//!
//! Nodes are string keys with a kind prefix (`folder:`, `file:`, `user:`,
//! `metadata:`, `action:`, `time:`, `ip:`). Edges are labelled triples.

use std::collections::BTreeMap;

use caren_core::models::CarenDocument;
use caren_observability::tracing_setup::events;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Edge label of a provenance triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvenanceRelation {
    /// folder -> file
    Contains,
    /// file -> user
    HasActor,
    /// file -> metadata
    HasMetadata,
    /// file -> action
    HasAction,
    /// action -> time
    OccurredAt,
    /// action -> ip
    FromIp,
}

impl ProvenanceRelation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contains => "contains",
            Self::HasActor => "has_actor",
            Self::HasMetadata => "has_metadata",
            Self::HasAction => "has_action",
            Self::OccurredAt => "occurred_at",
            Self::FromIp => "from_ip",
        }
    }
}

impl std::fmt::Display for ProvenanceRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed labelled graph keyed by node strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvenanceGraph {
    /// Node key -> explicit label. Only metadata nodes carry one.
    nodes: BTreeMap<String, Option<String>>,
    edges: BTreeMap<(String, String), ProvenanceRelation>,
}

impl ProvenanceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or set its label if it already exists.
    pub fn add_node(&mut self, key: impl Into<String>, label: Option<String>) {
        let slot = self.nodes.entry(key.into()).or_default();
        if label.is_some() {
            *slot = label;
        }
    }

    /// Add a triple, creating missing endpoints. A repeated pair keeps the
    /// latest relation.
    pub fn add_edge(
        &mut self,
        subject: impl Into<String>,
        object: impl Into<String>,
        relation: ProvenanceRelation,
    ) {
        let (subject, object) = (subject.into(), object.into());
        self.nodes.entry(subject.clone()).or_default();
        self.nodes.entry(object.clone()).or_default();
        self.edges.insert((subject, object), relation);
    }

    pub fn contains_node(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn relation(&self, subject: &str, object: &str) -> Option<ProvenanceRelation> {
        self.edges
            .get(&(subject.to_string(), object.to_string()))
            .copied()
    }

    /// Display label: the explicit label, else the key itself.
    pub fn label<'a>(&'a self, key: &'a str) -> Option<&'a str> {
        self.nodes
            .get(key)
            .map(|label| label.as_deref().unwrap_or(key))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.nodes.iter().map(|(k, l)| (k.as_str(), l.as_deref()))
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, ProvenanceRelation)> {
        self.edges
            .iter()
            .map(|((s, o), r)| (s.as_str(), o.as_str(), *r))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Build the provenance graph for an ingestion document.
pub fn build_provenance_graph(document: &CarenDocument) -> ProvenanceGraph {
    let mut graph = ProvenanceGraph::new();
    let folder = format!("folder:{}", document.folder_name());

    for file in &document.files {
        let file_name = file.file_name.as_deref().unwrap_or_default();
        let file_node = format!("file:{file_name}");

        graph.add_edge(&folder, &file_node, ProvenanceRelation::Contains);
        graph.add_edge(
            &file_node,
            format!("user:{}", file.actor()),
            ProvenanceRelation::HasActor,
        );

        if !file.metadata.is_empty() {
            let meta_node = format!("metadata:{file_name}");
            graph.add_node(&meta_node, Some(file.metadata_json()));
            graph.add_edge(&file_node, &meta_node, ProvenanceRelation::HasMetadata);
        }

        let ip = file.ip_address();
        for entry in &file.actions {
            let Some(Value::String(text)) = entry.get("action") else {
                continue;
            };
            if text.is_empty() {
                continue;
            }
            let action_node = format!("action:{}", text.trim());
            graph.add_edge(&file_node, &action_node, ProvenanceRelation::HasAction);

            if let Some(ts) = entry.get("timestamp").and_then(timestamp_text) {
                graph.add_edge(&action_node, format!("time:{ts}"), ProvenanceRelation::OccurredAt);
            }
            if let Some(ip) = &ip {
                graph.add_edge(&action_node, format!("ip:{ip}"), ProvenanceRelation::FromIp);
            }
        }
    }

    events::graph_built("provenance", graph.node_count(), graph.edge_count());
    graph
}

fn timestamp_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
