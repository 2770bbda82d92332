//! Fallback chain for embedding generation.
//!
//! Providers are tried in priority order. When a provider fails and a later
//! one serves the request, a degradation event is recorded. When the failed
//! provider serves a request again, the degradation is marked recovered.

use std::sync::{Mutex, MutexGuard};

use caren_core::errors::{CarenResult, EmbeddingError};
use caren_core::models::DegradationEvent;
use caren_core::traits::ITextEmbedder;
use caren_observability::{DegradationTracker, TrackedDegradation};
use tracing::warn;

pub struct DegradationChain {
    chain: Vec<Box<dyn ITextEmbedder>>,
    tracker: Mutex<DegradationTracker>,
}

impl Default for DegradationChain {
    fn default() -> Self {
        Self::new()
    }
}

impl DegradationChain {
    pub fn new() -> Self {
        Self {
            chain: Vec::new(),
            tracker: Mutex::new(DegradationTracker::new()),
        }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn ITextEmbedder>) {
        self.chain.push(provider);
    }

    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        // The tracker holds plain data; a poisoned lock is still usable.
        self.tracker.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn run<T>(
        &self,
        op: &str,
        call: impl Fn(&dyn ITextEmbedder) -> CarenResult<T>,
    ) -> CarenResult<T> {
        let mut failed: Vec<(&str, String)> = Vec::new();

        for provider in self.chain.iter().filter(|p| p.is_available()) {
            match call(&**provider) {
                Ok(value) => {
                    let mut tracker = self.tracker();
                    for (name, failure) in failed {
                        tracker.record(DegradationEvent::new(
                            name,
                            failure,
                            Some(provider.name().to_string()),
                        ));
                    }
                    if tracker.is_degraded(provider.name()) {
                        tracker.mark_recovered(provider.name());
                    }
                    return Ok(value);
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        op,
                        error = %e,
                        "provider failed, trying next in chain"
                    );
                    failed.push((provider.name(), e.to_string()));
                }
            }
        }

        let mut tracker = self.tracker();
        for (name, failure) in &failed {
            tracker.record(DegradationEvent::new(*name, failure.clone(), None));
        }
        Err(EmbeddingError::ProviderUnavailable {
            provider: format!("all {} providers failed", self.chain.len()),
        }
        .into())
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Snapshot of every recorded degradation.
    pub fn degradations(&self) -> Vec<TrackedDegradation> {
        self.tracker().events().to_vec()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl ITextEmbedder for DegradationChain {
    fn embed(&self, text: &str) -> CarenResult<Vec<f32>> {
        self.run("embed", |p| p.embed(text))
    }

    fn embed_batch(&self, texts: &[String]) -> CarenResult<Vec<Vec<f32>>> {
        self.run("embed_batch", |p| p.embed_batch(texts))
    }

    /// Dimensions of the first provider; every provider in a chain is
    /// expected to agree.
    fn dimensions(&self) -> usize {
        self.chain.first().map_or(0, |p| p.dimensions())
    }

    fn name(&self) -> &str {
        self.active_provider_name()
    }

    fn is_available(&self) -> bool {
        self.chain.iter().any(|p| p.is_available())
    }
}
