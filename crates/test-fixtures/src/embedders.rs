use std::collections::HashMap;

use caren_core::errors::{CarenResult, EmbeddingError};
use caren_core::traits::ITextEmbedder;

/// Deterministic embedder for tests.
///
/// Texts registered with [`StubEmbedder::with`] return their vector as given.
/// Any other text gets a hashed bag-of-words vector, so unrelated strings are
/// still deterministic. Texts registered with [`StubEmbedder::failing_on`]
/// return an error.
#[derive(Debug, Clone, Default)]
pub struct StubEmbedder {
    dimensions: usize,
    vectors: HashMap<String, Vec<f32>>,
    failures: Vec<String>,
}

impl StubEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
            ..Default::default()
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.failures.push(text.to_string());
        self
    }

    fn bag_of_words(&self, text: &str) -> Vec<f32> {
        let mut v = vec![0.0f32; self.dimensions];
        for word in text.split_whitespace() {
            let bucket = word
                .bytes()
                .fold(7usize, |h, b| h.wrapping_mul(31).wrapping_add(b as usize));
            v[bucket % self.dimensions] += 1.0;
        }
        v
    }
}

impl ITextEmbedder for StubEmbedder {
    fn embed(&self, text: &str) -> CarenResult<Vec<f32>> {
        if self.failures.iter().any(|f| f == text) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("stub failure for {text:?}"),
            }
            .into());
        }
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.bag_of_words(text)))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "stub"
    }
}

/// Embedder that always fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEmbedder;

impl ITextEmbedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> CarenResult<Vec<f32>> {
        Err(EmbeddingError::InferenceFailed {
            reason: "failing embedder".to_string(),
        }
        .into())
    }

    fn dimensions(&self) -> usize {
        0
    }

    fn name(&self) -> &str {
        "failing"
    }
}
