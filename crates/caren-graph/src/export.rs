//! Serializable views of the graphs, handed to the visualization side.

use caren_core::errors::CarenResult;
use caren_core::{EdgeKind, Graph, NodeId};
use serde::{Deserialize, Serialize};

use crate::provenance::{ProvenanceGraph, ProvenanceRelation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeExport {
    pub id: NodeId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeExport {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub causal_weight: Option<f64>,
}

/// `{ directed, nodes: [...], edges: [...] }`, nodes and edges in id order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphExport {
    pub directed: bool,
    pub nodes: Vec<NodeExport>,
    pub edges: Vec<EdgeExport>,
}

impl From<&Graph> for GraphExport {
    fn from(graph: &Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            nodes: graph
                .nodes()
                .map(|(id, attrs)| NodeExport {
                    id,
                    label: attrs.label.clone(),
                    group: attrs.group,
                })
                .collect(),
            edges: graph
                .edges()
                .map(|(source, target, attrs)| EdgeExport {
                    source,
                    target,
                    kind: attrs.kind(),
                    weight: attrs.weight(),
                    causal_weight: attrs.causal_weight(),
                })
                .collect(),
        }
    }
}

impl GraphExport {
    pub fn to_json_pretty(&self) -> CarenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceNodeExport {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEdgeExport {
    pub source: String,
    pub target: String,
    pub relation: ProvenanceRelation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceExport {
    pub nodes: Vec<ProvenanceNodeExport>,
    pub edges: Vec<ProvenanceEdgeExport>,
}

impl From<&ProvenanceGraph> for ProvenanceExport {
    fn from(graph: &ProvenanceGraph) -> Self {
        Self {
            nodes: graph
                .nodes()
                .map(|(id, label)| ProvenanceNodeExport {
                    id: id.to_string(),
                    label: label.unwrap_or(id).to_string(),
                })
                .collect(),
            edges: graph
                .edges()
                .map(|(source, target, relation)| ProvenanceEdgeExport {
                    source: source.to_string(),
                    target: target.to_string(),
                    relation,
                })
                .collect(),
        }
    }
}

impl ProvenanceExport {
    pub fn to_json_pretty(&self) -> CarenResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use caren_core::{EdgeAttrs, NodeAttrs};

    use super::*;

    fn combined() -> Graph {
        let mut g = Graph::directed();
        for (id, label) in [(0, "unlock door"), (1, "open door"), (2, "walk in")] {
            g.add_node(id, NodeAttrs::for_action(id, Some(label)));
        }
        g.set_group(0, 0).unwrap();
        g.add_edge(0, 1, EdgeAttrs::both(0.42, 0.31).unwrap()).unwrap();
        g.add_edge(1, 2, EdgeAttrs::causal(0.29).unwrap()).unwrap();
        g
    }

    #[test]
    fn edges_carry_type_and_optional_weights() {
        let json = serde_json::to_value(GraphExport::from(&combined())).unwrap();
        assert_eq!(json["directed"], true);

        let both = &json["edges"][0];
        assert_eq!(both["type"], "both");
        assert_eq!(both["weight"], 0.42);
        assert_eq!(both["causal_weight"], 0.31);

        let causal = &json["edges"][1];
        assert_eq!(causal["type"], "causal");
        assert!(causal.get("weight").is_none());
    }

    #[test]
    fn group_only_when_assigned() {
        let json = serde_json::to_value(GraphExport::from(&combined())).unwrap();
        assert_eq!(json["nodes"][0]["group"], 0);
        assert!(json["nodes"][1].get("group").is_none());
        assert_eq!(json["nodes"][2]["label"], "walk in");
    }

    #[test]
    fn pretty_json_parses_back() {
        let export = GraphExport::from(&combined());
        let text = export.to_json_pretty().unwrap();
        let back: GraphExport = serde_json::from_str(&text).unwrap();
        assert_eq!(back, export);
    }

    #[test]
    fn provenance_labels_default_to_key() {
        let mut g = ProvenanceGraph::new();
        g.add_node("metadata:a.txt", Some("{}".to_string()));
        g.add_edge("file:a.txt", "metadata:a.txt", ProvenanceRelation::HasMetadata);
        let export = ProvenanceExport::from(&g);

        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["nodes"][0]["id"], "file:a.txt");
        assert_eq!(json["nodes"][0]["label"], "file:a.txt");
        assert_eq!(json["nodes"][1]["label"], "{}");
        assert_eq!(json["edges"][0]["relation"], "has_metadata");
    }
}
