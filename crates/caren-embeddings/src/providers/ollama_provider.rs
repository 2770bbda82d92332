//! Local Ollama embedding provider (`POST /api/embed`).
//!
//! The trait is synchronous, so the provider owns a current-thread tokio
//! runtime and blocks on each request. Do not call it from inside another
//! tokio runtime.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use caren_core::errors::{CarenResult, EmbeddingError};
use caren_core::traits::ITextEmbedder;
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

pub struct OllamaProvider {
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    base_url: String,
    model: String,
    dimensions: usize,
    /// Cleared after a transport failure so the chain skips this provider.
    healthy: AtomicBool,
}

impl OllamaProvider {
    pub fn new(base_url: Option<&str>, model: &str, dimensions: usize) -> CarenResult<Self> {
        let unavailable = |reason: String| EmbeddingError::ProviderUnavailable {
            provider: format!("ollama: {reason}"),
        };
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| unavailable(e.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| unavailable(e.to_string()))?;

        Ok(Self {
            client,
            runtime,
            base_url: base_url
                .unwrap_or(DEFAULT_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            model: model.to_string(),
            dimensions,
            healthy: AtomicBool::new(true),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe `GET /api/tags` and update the health flag.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let ok = self.runtime.block_on(async {
            self.client
                .get(&url)
                .send()
                .await
                .map(|r| r.status().is_success())
                .unwrap_or(false)
        });
        self.healthy.store(ok, Ordering::Relaxed);
        ok
    }

    fn request(&self, texts: &[String]) -> CarenResult<Vec<Vec<f32>>> {
        let url = format!("{}/api/embed", self.base_url);
        let body = EmbedRequest {
            model: &self.model,
            input: texts,
        };

        let response: EmbedResponse = self
            .runtime
            .block_on(async {
                self.client
                    .post(&url)
                    .json(&body)
                    .send()
                    .await?
                    .error_for_status()?
                    .json()
                    .await
            })
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    self.healthy.store(false, Ordering::Relaxed);
                }
                EmbeddingError::InferenceFailed {
                    reason: format!("ollama request failed: {e}"),
                }
            })?;

        if response.embeddings.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "ollama returned {} embeddings for {} inputs",
                    response.embeddings.len(),
                    texts.len()
                ),
            }
            .into());
        }
        for vec in &response.embeddings {
            if vec.len() != self.dimensions {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: self.dimensions,
                    actual: vec.len(),
                }
                .into());
            }
        }
        debug!(model = %self.model, count = texts.len(), "ollama embeddings received");
        Ok(response.embeddings)
    }
}

impl ITextEmbedder for OllamaProvider {
    fn embed(&self, text: &str) -> CarenResult<Vec<f32>> {
        let mut out = self.request(&[text.to_string()])?;
        out.pop().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: "ollama returned no embedding".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> CarenResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn is_available(&self) -> bool {
        self.healthy.load(Ordering::Relaxed)
    }
}
