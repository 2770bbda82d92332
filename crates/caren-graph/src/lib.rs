//! # caren-graph
//!
//! Relation scoring and graph inference over action records.
//!
//! - [`scoring`]: the four similarity components and the two composites.
//! - [`rst`]: undirected relatedness graph, strict `>` threshold.
//! - [`causal`]: directed causal graph, strict time order, inclusive `>=` threshold.
//! - [`combine`]: merge of the two into one typed, directed graph.
//! - [`clustering`]: greedy modularity communities written to node `group`.
//! - [`provenance`]: folder/file/action/time/ip triples from an ingestion document.
//! - [`engine`]: runs the full pipeline from a [`CarenConfig`](caren_core::CarenConfig).
//! - [`export`]: serde views of the graphs for the visualization side.

pub mod causal;
pub mod clustering;
pub mod combine;
pub mod engine;
pub mod export;
pub mod provenance;
pub mod rst;
pub mod scoring;

pub use causal::infer_causal_paths;
pub use clustering::{annotate_groups, GreedyModularity};
pub use combine::build_combined_graph;
pub use engine::{CarenEngine, GraphSet};
pub use export::{GraphExport, ProvenanceExport};
pub use provenance::{build_provenance_graph, ProvenanceGraph, ProvenanceRelation};
pub use rst::build_rst_graph;
pub use scoring::{PairScore, RelationScorer};
