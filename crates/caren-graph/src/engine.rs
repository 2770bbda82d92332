//! CarenEngine: config in, the three graphs out.
//!
//! Owns the embedder and the optional partitioner for the lifetime of the
//! engine; each `run` borrows them through a fresh `RelationScorer`.

use caren_core::config::CarenConfig;
use caren_core::errors::CarenResult;
use caren_core::traits::{IGraphPartitioner, ITextEmbedder};
use caren_core::{ActionRecord, CarenDocument, Graph};
use caren_embeddings::{EmbeddingEngine, MemoizedEmbedder};
use tracing::info;

use crate::causal::infer_causal_paths;
use crate::clustering::{annotate_groups, GreedyModularity};
use crate::combine::build_combined_graph;
use crate::export::GraphExport;
use crate::rst::build_rst_graph;
use crate::scoring::RelationScorer;

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSet {
    pub rst: Graph,
    pub causal: Graph,
    pub combined: Graph,
}

impl GraphSet {
    /// Serializable views, in `(rst, causal, combined)` order.
    pub fn export(&self) -> (GraphExport, GraphExport, GraphExport) {
        (
            GraphExport::from(&self.rst),
            GraphExport::from(&self.causal),
            GraphExport::from(&self.combined),
        )
    }
}

pub struct CarenEngine {
    config: CarenConfig,
    embedder: Box<dyn ITextEmbedder>,
    partitioner: Option<Box<dyn IGraphPartitioner>>,
}

impl CarenEngine {
    /// Validate `config` and build the configured embedder and partitioner.
    pub fn from_config(config: CarenConfig) -> CarenResult<Self> {
        config.validate()?;
        let embedder: Box<dyn ITextEmbedder> = Box::new(EmbeddingEngine::new(&config.embedding));
        let partitioner = default_partitioner(&config);

        info!(
            embedder = embedder.name(),
            cluster = config.graph.cluster,
            rst_threshold = config.graph.rst_threshold,
            causal_threshold = config.graph.causal_threshold,
            "CarenEngine initialized"
        );
        Ok(Self {
            config,
            embedder,
            partitioner,
        })
    }

    /// Use a caller-supplied embedder, memoized with the configured cache size.
    pub fn with_embedder(config: CarenConfig, embedder: Box<dyn ITextEmbedder>) -> CarenResult<Self> {
        config.validate()?;
        let cache_size = config.embedding.cache_size;
        let partitioner = default_partitioner(&config);
        Ok(Self {
            config,
            embedder: Box::new(MemoizedEmbedder::new(embedder, cache_size)),
            partitioner,
        })
    }

    /// Replace the partitioner. `None` disables community enrichment.
    pub fn with_partitioner(mut self, partitioner: Option<Box<dyn IGraphPartitioner>>) -> Self {
        self.partitioner = partitioner;
        self
    }

    pub fn config(&self) -> &CarenConfig {
        &self.config
    }

    pub fn embedder(&self) -> &dyn ITextEmbedder {
        &*self.embedder
    }

    /// Relatedness graph (with groups, if clustering is on), causal graph,
    /// and their merge.
    pub fn run(&self, records: &[ActionRecord]) -> CarenResult<GraphSet> {
        let scorer = RelationScorer::with_weights(
            &*self.embedder,
            self.config.rst_weights.clone(),
            self.config.causal_weights.clone(),
        );
        let graph = &self.config.graph;

        let mut rst = build_rst_graph(records, graph.rst_threshold, &scorer)?;
        if let Some(partitioner) = &self.partitioner {
            annotate_groups(&mut rst, &**partitioner)?;
        }
        let causal = infer_causal_paths(records, graph.causal_threshold, &scorer)?;
        let combined = build_combined_graph(&rst, &causal)?;

        info!(
            records = records.len(),
            rst_edges = rst.edge_count(),
            causal_edges = causal.edge_count(),
            combined_edges = combined.edge_count(),
            "pipeline complete"
        );
        Ok(GraphSet { rst, causal, combined })
    }

    pub fn run_document(&self, document: &CarenDocument) -> CarenResult<GraphSet> {
        self.run(&document.action_records())
    }
}

fn default_partitioner(config: &CarenConfig) -> Option<Box<dyn IGraphPartitioner>> {
    config
        .graph
        .cluster
        .then(|| Box::new(GreedyModularity::from_config(&config.graph)) as Box<dyn IGraphPartitioner>)
}

#[cfg(test)]
mod tests {
    use test_fixtures::{RecordBuilder, StubEmbedder};

    use super::*;

    fn door_engine(cluster: bool) -> CarenEngine {
        let mut config = CarenConfig::default();
        config.graph.rst_threshold = 0.1;
        config.graph.cluster = cluster;
        let embedder = StubEmbedder::new(2)
            .with("unlock door", vec![1.0, 0.0])
            .with("open door", vec![0.8, 0.6]);
        CarenEngine::with_embedder(config, Box::new(embedder)).unwrap()
    }

    fn door_records() -> Vec<ActionRecord> {
        vec![
            RecordBuilder::action("unlock door").at("2024-01-01T10:00:00").build(),
            RecordBuilder::action("open door").at("2024-01-01T10:00:05").build(),
            RecordBuilder::blank().at("2024-01-01T10:00:10").build(),
        ]
    }

    #[test]
    fn run_produces_all_three_graphs() {
        let set = door_engine(false).run(&door_records()).unwrap();
        assert_eq!(set.rst.node_count(), 2);
        assert_eq!(set.causal.node_count(), 3);
        assert!(set.combined.contains_edge(0, 1));
    }

    #[test]
    fn clustering_sets_groups_on_rst_nodes() {
        let set = door_engine(true).run(&door_records()).unwrap();
        assert!(set.rst.nodes().all(|(_, n)| n.group.is_some()));
        assert_eq!(set.combined.node(0).and_then(|n| n.group), Some(0));
    }

    #[test]
    fn partitioner_can_be_disabled() {
        let engine = door_engine(true).with_partitioner(None);
        let set = engine.run(&door_records()).unwrap();
        assert!(set.rst.nodes().all(|(_, n)| n.group.is_none()));
    }

    #[test]
    fn invalid_config_rejected() {
        let mut config = CarenConfig::default();
        config.graph.causal_threshold = -1.0;
        assert!(CarenEngine::from_config(config).is_err());
    }

    #[test]
    fn empty_input_gives_empty_graphs() {
        let set = door_engine(true).run(&[]).unwrap();
        assert!(set.rst.is_empty());
        assert!(set.causal.is_empty());
        assert!(set.combined.is_empty());
    }
}
