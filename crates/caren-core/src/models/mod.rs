mod action_record;
mod caren_document;
mod degradation_event;
mod relation_components;

pub use action_record::ActionRecord;
pub use caren_document::{CarenDocument, FileEntry};
pub use degradation_event::DegradationEvent;
pub use relation_components::RelationComponents;

use serde_json::Value;

/// Text view of a loosely typed JSON scalar. Null, arrays and objects yield `None`.
pub(crate) fn value_as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
