use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{value_as_text, ActionRecord};
use crate::errors::IngestError;

/// Metadata keys copied into each record's `M` field, in output order.
const METADATA_KEYS: [&str; 5] = [
    "device_id",
    "user_id",
    "address",
    "card_number",
    "ip_address",
];

static NULL: Value = Value::Null;

/// The folder-level ingestion document written by the extraction stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarenDocument {
    #[serde(rename = "folderID")]
    pub folder_id: Option<String>,
    #[serde(rename = "folderPath")]
    pub folder_path: Option<String>,
    #[serde(rename = "folderOwner")]
    pub folder_owner: Option<String>,
    pub files: Vec<FileEntry>,
}

/// One source file and the actions extracted from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    #[serde(rename = "fileID")]
    pub file_id: Option<String>,
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
    #[serde(rename = "createdTime")]
    pub created_time: Option<String>,
    #[serde(rename = "modifiedTime")]
    pub modified_time: Option<String>,
    pub metadata: Map<String, Value>,
    /// Raw action entries; non-object entries are ignored by the loader.
    pub actions: Vec<Value>,
}

impl CarenDocument {
    pub fn from_json(source: &str) -> Result<Self, IngestError> {
        serde_json::from_str(source).map_err(|e| IngestError::ParseFailed {
            reason: e.to_string(),
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| IngestError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&source)
    }

    /// Last path component of `folderPath`, or empty.
    pub fn folder_name(&self) -> &str {
        self.folder_path
            .as_deref()
            .map(|p| p.trim_end_matches(['/', '\\']))
            .and_then(|p| p.rsplit(['/', '\\']).next())
            .unwrap_or("")
    }

    /// Flatten every file's actions into records, in file then action order.
    ///
    /// `ID` is `<fileID>_<index>` where the index counts every entry in the
    /// file's action list, skipped ones included.
    pub fn action_records(&self) -> Vec<ActionRecord> {
        self.files.iter().flat_map(FileEntry::action_records).collect()
    }
}

impl FileEntry {
    pub fn action_records(&self) -> Vec<ActionRecord> {
        let file_id = self.file_id.as_deref().unwrap_or("None");
        let metadata = self.metadata_text();

        self.actions
            .iter()
            .enumerate()
            .filter_map(|(idx, entry)| {
                let entry = entry.as_object()?;
                let action = match entry.get("action") {
                    Some(Value::String(s)) if !s.is_empty() => s.clone(),
                    _ => return None,
                };
                Some(ActionRecord {
                    action: Some(action),
                    action_time: entry.get("timestamp").and_then(value_as_text),
                    source_time: self.modified_time.clone(),
                    identity: Some(format!("{file_id}_{idx}")),
                    context: entry.get("context").and_then(value_as_text),
                    metadata: Some(metadata.clone()),
                })
            })
            .collect()
    }

    /// User, falling back to device, falling back to `unknown_user`.
    pub fn actor(&self) -> String {
        ["user_id", "device_id"]
            .iter()
            .filter_map(|k| self.metadata.get(*k).and_then(value_as_text))
            .find(|v| !v.is_empty())
            .unwrap_or_else(|| crate::constants::UNKNOWN_USER.to_string())
    }

    pub fn ip_address(&self) -> Option<String> {
        self.metadata
            .get("ip_address")
            .and_then(value_as_text)
            .filter(|ip| !ip.is_empty())
    }

    /// The fixed metadata subset as a JSON object, keys in a stable order and
    /// absent keys written as `null`.
    pub fn metadata_text(&self) -> String {
        object_text(
            METADATA_KEYS
                .iter()
                .map(|key| (*key, self.metadata.get(*key).unwrap_or(&NULL))),
        )
    }

    /// The whole metadata map as a JSON object, keys sorted.
    pub fn metadata_json(&self) -> String {
        object_text(self.metadata.iter().map(|(k, v)| (k.as_str(), v)))
    }
}

/// `{"k": v, ...}` with spaced separators and unescaped non-ASCII text.
fn object_text<'a>(entries: impl Iterator<Item = (&'a str, &'a Value)>) -> String {
    let fields: Vec<String> = entries
        .map(|(key, value)| format!("{}: {value}", Value::from(key)))
        .collect();
    format!("{{{}}}", fields.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "folderID": "f1",
        "folderPath": "/data/case_07/",
        "folderOwner": "analyst",
        "files": [
            {
                "fileID": "abc",
                "fileName": "chat.txt",
                "modifiedTime": "2024-03-01T09:00:00",
                "metadata": {"user_id": "u9", "ip_address": "10.0.0.5"},
                "actions": [
                    {"action": "ordered coffee", "timestamp": "2024-03-01T08:10:00", "context": "cafe"},
                    {"action": "", "timestamp": "2024-03-01T08:11:00"},
                    "not an object",
                    {"action": "paid by card", "context": "counter"}
                ]
            }
        ]
    }"#;

    #[test]
    fn maps_actions_to_records() {
        let doc = CarenDocument::from_json(DOC).unwrap();
        let records = doc.action_records();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.action.as_deref(), Some("ordered coffee"));
        assert_eq!(first.action_time.as_deref(), Some("2024-03-01T08:10:00"));
        assert_eq!(first.source_time.as_deref(), Some("2024-03-01T09:00:00"));
        assert_eq!(first.identity.as_deref(), Some("abc_0"));
        assert_eq!(first.context.as_deref(), Some("cafe"));

        // Index counts skipped entries too.
        assert_eq!(records[1].identity.as_deref(), Some("abc_3"));
        assert_eq!(records[1].action_time, None);
    }

    #[test]
    fn metadata_text_has_fixed_keys() {
        let doc = CarenDocument::from_json(DOC).unwrap();
        assert_eq!(
            doc.files[0].metadata_text(),
            r#"{"device_id": null, "user_id": "u9", "address": null, "card_number": null, "ip_address": "10.0.0.5"}"#
        );
    }

    #[test]
    fn metadata_json_is_sorted() {
        let doc = CarenDocument::from_json(DOC).unwrap();
        assert_eq!(
            doc.files[0].metadata_json(),
            r#"{"ip_address": "10.0.0.5", "user_id": "u9"}"#
        );
    }

    #[test]
    fn actor_and_folder_name() {
        let doc = CarenDocument::from_json(DOC).unwrap();
        assert_eq!(doc.folder_name(), "case_07");
        assert_eq!(doc.files[0].actor(), "u9");
        assert_eq!(FileEntry::default().actor(), "unknown_user");
    }

    #[test]
    fn malformed_document_is_parse_error() {
        let err = CarenDocument::from_json("{ not json").unwrap_err();
        assert!(matches!(err, IngestError::ParseFailed { .. }));
    }
}
