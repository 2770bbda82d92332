//! EmbeddingEngine: the entry point for caren-embeddings.
//!
//! Configured provider first, hashed TF last, memoized per text.
//! Implements `ITextEmbedder` so it can be handed to the scorer directly.

use caren_core::config::EmbeddingConfig;
use caren_core::errors::CarenResult;
use caren_core::traits::ITextEmbedder;
use caren_observability::TrackedDegradation;
use tracing::info;

use crate::cache::CacheStats;
use crate::degradation::DegradationChain;
use crate::memoized::MemoizedEmbedder;
use crate::providers;

pub struct EmbeddingEngine {
    inner: MemoizedEmbedder<DegradationChain>,
}

impl EmbeddingEngine {
    pub fn new(config: &EmbeddingConfig) -> Self {
        let mut chain = DegradationChain::new();
        let primary = providers::create_provider(config);
        let primary_is_hashed_tf = primary.name() == providers::HASHED_TF_NAME;
        chain.push(primary);
        if !primary_is_hashed_tf {
            chain.push(Box::new(providers::HashedTfProvider::new(config.dimensions)));
        }

        info!(
            provider = chain.active_provider_name(),
            dims = config.dimensions,
            cache_size = config.cache_size,
            "EmbeddingEngine initialized"
        );

        Self {
            inner: MemoizedEmbedder::new(chain, config.cache_size),
        }
    }

    /// Name of the provider currently serving requests.
    pub fn active_provider(&self) -> &str {
        self.inner.inner().active_provider_name()
    }

    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.inner.inner().degradations()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.inner.stats()
    }
}

impl ITextEmbedder for EmbeddingEngine {
    fn embed(&self, text: &str) -> CarenResult<Vec<f32>> {
        self.inner.embed(text)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}
