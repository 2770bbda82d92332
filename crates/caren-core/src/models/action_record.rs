use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One observed action, as produced by the extraction stage.
///
/// Field names on the wire follow the extraction format (`A`, `T_A`, `T_S`,
/// `ID`, `C`, `M`). Missing fields deserialize as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Action description. Non-text values are treated as absent.
    #[serde(rename = "A", default, deserialize_with = "text_only")]
    pub action: Option<String>,
    /// Action timestamp, best-effort parseable.
    #[serde(rename = "T_A", default, deserialize_with = "text_like")]
    pub action_time: Option<String>,
    /// Source timestamp, consulted only when `T_A` is unusable.
    #[serde(rename = "T_S", default, deserialize_with = "text_like")]
    pub source_time: Option<String>,
    /// Identity token (device/user identifiers).
    #[serde(rename = "ID", default, deserialize_with = "text_like")]
    pub identity: Option<String>,
    /// Contextual text.
    #[serde(rename = "C", default, deserialize_with = "text_like")]
    pub context: Option<String>,
    /// Serialized metadata (addresses, device/user/network identifiers).
    #[serde(rename = "M", default, deserialize_with = "text_like")]
    pub metadata: Option<String>,
}

impl ActionRecord {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Default::default()
        }
    }

    /// Trimmed action text, or `None` if missing or blank.
    pub fn valid_action(&self) -> Option<&str> {
        self.action
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }

    pub fn has_valid_action(&self) -> bool {
        self.valid_action().is_some()
    }
}

/// Accept strings only; anything else (numbers, null, objects) is absent.
fn text_only<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Accept strings, and stringify scalars. Null and containers are absent.
fn text_like<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(super::value_as_text(&Value::deserialize(deserializer)?))
}
