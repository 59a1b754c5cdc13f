use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A quiz exactly as it sits in the document store. Every field is
/// optional: the collection is written by several client versions and
/// older records are missing fields newer ones carry. Fields this crate
/// never reads are kept opaque in `extra`.
#[derive(Clone, Debug, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDocument {
    pub created_by_user_id: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A quiz ready for display: its id stamped from the storage key and a
/// creator known to be present.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    pub id: String,
    pub created_by_user_id: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub desc: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuizRecord {
    /// Stamps `key` as the record id. Returns `None` when the document
    /// has no creator, the one field display cannot do without.
    pub fn from_document(key: &str, document: &QuizDocument) -> Option<Self> {
        let created_by_user_id = document.created_by_user_id.clone()?;

        Some(QuizRecord {
            id: key.to_string(),
            created_by_user_id,
            name: document.name.clone(),
            title: document.title.clone(),
            desc: document.desc.clone(),
            extra: document.extra.clone(),
        })
    }
}
