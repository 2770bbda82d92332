//! Pairwise relation scoring.
//!
//! Pure with respect to graph state: the same two records, weights and
//! embedder always produce the same score.

pub mod composite;
pub mod identity;
pub mod semantic;

use caren_core::config::{CausalWeights, RstWeights};
use caren_core::models::RelationComponents;
use caren_core::traits::ITextEmbedder;
use caren_core::ActionRecord;

pub use composite::{causal_score, round_to, rst_score};
pub use identity::identity_score;
pub use semantic::{cosine_similarity, semantic_score};

/// Components and both composites for one pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairScore {
    pub components: RelationComponents,
    pub rst: f64,
    pub causal: f64,
}

/// Scores record pairs with one embedder and one pair of weight sets.
pub struct RelationScorer<'a> {
    embedder: &'a dyn ITextEmbedder,
    rst_weights: RstWeights,
    causal_weights: CausalWeights,
}

impl<'a> RelationScorer<'a> {
    pub fn new(embedder: &'a dyn ITextEmbedder) -> Self {
        Self {
            embedder,
            rst_weights: RstWeights::default(),
            causal_weights: CausalWeights::default(),
        }
    }

    pub fn with_weights(
        embedder: &'a dyn ITextEmbedder,
        rst_weights: RstWeights,
        causal_weights: CausalWeights,
    ) -> Self {
        Self {
            embedder,
            rst_weights,
            causal_weights,
        }
    }

    pub fn rst_weights(&self) -> &RstWeights {
        &self.rst_weights
    }

    pub fn causal_weights(&self) -> &CausalWeights {
        &self.causal_weights
    }

    /// `(f_I, f_S, f_C, f_M)` for a pair. Identity compares `ID`; the
    /// semantic components compare `A`, `C` and `M` respectively.
    pub fn components(&self, a: &ActionRecord, b: &ActionRecord) -> RelationComponents {
        RelationComponents {
            identity: identity_score(a.identity.as_deref(), b.identity.as_deref()),
            semantic: semantic_score(a.action.as_deref(), b.action.as_deref(), self.embedder),
            context: semantic_score(a.context.as_deref(), b.context.as_deref(), self.embedder),
            metadata: semantic_score(a.metadata.as_deref(), b.metadata.as_deref(), self.embedder),
        }
    }

    pub fn rst_score(&self, a: &ActionRecord, b: &ActionRecord) -> f64 {
        rst_score(&self.components(a, b), &self.rst_weights)
    }

    pub fn score_pair(&self, a: &ActionRecord, b: &ActionRecord) -> PairScore {
        let components = self.components(a, b);
        let rst = rst_score(&components, &self.rst_weights);
        let causal = causal_score(&components, rst, &self.causal_weights);
        PairScore {
            components,
            rst,
            causal,
        }
    }
}
