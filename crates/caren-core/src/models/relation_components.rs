use serde::{Deserialize, Serialize};

/// The four pairwise similarity components `(f_I, f_S, f_C, f_M)`.
///
/// Identity is a token Jaccard in [0, 1]. The three semantic components are
/// cosine similarities and are passed through unclamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationComponents {
    pub identity: f64,
    pub semantic: f64,
    pub context: f64,
    pub metadata: f64,
}

impl RelationComponents {
    pub fn new(identity: f64, semantic: f64, context: f64, metadata: f64) -> Self {
        Self {
            identity,
            semantic,
            context,
            metadata,
        }
    }

    /// Components in `(f_I, f_S, f_C, f_M)` order.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.identity, self.semantic, self.context, self.metadata)
    }
}
