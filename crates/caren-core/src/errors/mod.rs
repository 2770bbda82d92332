//! Error taxonomy. One enum per subsystem, folded into [`CarenError`].

mod config_error;
mod embedding_error;
mod graph_error;
mod ingest_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use graph_error::GraphError;
pub use ingest_error::IngestError;

/// Top-level error for the CAREN engine.
///
/// Per-pair scoring failures never reach this type; they degrade to a zero
/// similarity inside the scorer. Only failures that invalidate a whole run
/// are surfaced here.
#[derive(Debug, thiserror::Error)]
pub enum CarenError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CarenResult<T> = Result<T, CarenError>;
