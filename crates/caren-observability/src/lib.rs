//! # caren-observability
//!
//! Tracing subscriber setup, span macros and structured event helpers for
//! the graph builders, plus a tracker for embedding-provider degradations.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::init_tracing;
