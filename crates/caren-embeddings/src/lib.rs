//! # caren-embeddings
//!
//! Embedding providers used by the semantic similarity components.
//! `EmbeddingEngine` wires a configured provider into a fallback chain that
//! ends in the always-available hashed term-frequency provider, and memoizes results per
//! unique text so each distinct string is embedded once per run.

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod memoized;
pub mod providers;

pub use cache::{CacheStats, EmbeddingCache};
pub use degradation::DegradationChain;
pub use engine::EmbeddingEngine;
pub use memoized::MemoizedEmbedder;
pub use providers::{create_provider, HashedTfProvider, OllamaProvider, HASHED_TF_NAME};
