//! # caren-core
//!
//! Foundation crate for the CAREN relation engine.
//! Defines action records, the owned graph model, errors, config, and the
//! capability traits (embedding, partitioning) injected into the engine.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod graph;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CarenConfig;
pub use errors::{CarenError, CarenResult};
pub use graph::{EdgeAttrs, EdgeKind, Graph, NodeAttrs, NodeId};
pub use models::{ActionRecord, CarenDocument, RelationComponents};
