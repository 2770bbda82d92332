/// Errors reading the action collection produced by the extraction stage.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("failed to parse action document: {reason}")]
    ParseFailed { reason: String },
}
