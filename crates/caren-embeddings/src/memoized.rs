//! Per-run memoization in front of any embedder.

use caren_core::errors::CarenResult;
use caren_core::traits::ITextEmbedder;

use crate::cache::{CacheStats, EmbeddingCache};

/// Embeds each distinct text once. Failures are not cached, so a transient
/// provider error is retried on the next request for the same text.
pub struct MemoizedEmbedder<E> {
    inner: E,
    cache: EmbeddingCache,
}

impl<E: ITextEmbedder> MemoizedEmbedder<E> {
    pub fn new(inner: E, max_entries: u64) -> Self {
        Self {
            inner,
            cache: EmbeddingCache::new(max_entries),
        }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn clear(&self) {
        self.cache.clear();
    }
}

impl<E: ITextEmbedder> ITextEmbedder for MemoizedEmbedder<E> {
    fn embed(&self, text: &str) -> CarenResult<Vec<f32>> {
        let key = EmbeddingCache::key(text);
        if let Some(vec) = self.cache.get(&key) {
            return Ok(vec);
        }
        let vec = self.inner.embed(text)?;
        self.cache.insert(key, vec.clone());
        Ok(vec)
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
