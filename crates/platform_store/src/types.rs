//! Object-store data types shared across contracts and implementations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single remote object descriptor returned by listing operations.
///
/// `name` is the only field the gallery relies on: it is the listing key, the delete key, and
/// the public-URL lookup key. Everything else is opaque remote metadata carried along for
/// display or debugging and never mutated locally.
pub struct ObjectEntry {
    /// Object key within its bucket.
    pub name: String,
    /// Remote-assigned object id, when the store provides one.
    #[serde(default)]
    pub id: Option<String>,
    /// Creation timestamp as reported by the store.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Last-update timestamp as reported by the store.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Remaining remote metadata, kept opaque.
    #[serde(default)]
    pub metadata: Value,
}

impl ObjectEntry {
    /// Builds an entry carrying only a key, with every metadata field empty.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            created_at: None,
            updated_at: None,
            metadata: Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_deserializes_from_minimal_listing_payload() {
        let entry: ObjectEntry = serde_json::from_str(r#"{"name":"1700_cat.png"}"#).expect("parse");
        assert_eq!(entry.name, "1700_cat.png");
        assert_eq!(entry.id, None);
        assert_eq!(entry.metadata, Value::Null);
    }

    #[test]
    fn entry_preserves_remote_metadata_payload() {
        let raw = r#"{"name":"a.png","id":"abc","metadata":{"size":42,"mimetype":"image/png"}}"#;
        let entry: ObjectEntry = serde_json::from_str(raw).expect("parse");
        assert_eq!(entry.id.as_deref(), Some("abc"));
        assert_eq!(entry.metadata["size"], 42);
    }
}
