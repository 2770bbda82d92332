use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recorded when an embedding provider fails and a fallback takes over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationEvent {
    /// Provider that failed.
    pub component: String,
    pub failure: String,
    /// Provider that served the request instead, if any did.
    pub fallback_used: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl DegradationEvent {
    pub fn new(
        component: impl Into<String>,
        failure: impl Into<String>,
        fallback_used: Option<String>,
    ) -> Self {
        Self {
            component: component.into(),
            failure: failure.into(),
            fallback_used,
            timestamp: Utc::now(),
        }
    }
}
