use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier.
///
/// json-server style backends hand out either integers or strings depending on
/// how the data file was seeded. We keep whichever representation the store
/// used so ids round-trip unchanged in PUT bodies.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(untagged)]
pub(crate) enum EntityId {
    Int(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Notebook {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Note {
    pub id: EntityId,
    pub book_id: EntityId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// ISO-8601 creation / last-edit timestamp, kept as the store sent it.
    #[serde(default)]
    pub datetime: String,

    /// Fields we don't model. PUT replaces the whole record, so they have to be
    /// echoed back.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Note {
    pub fn with_field(&self, field: NoteField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            NoteField::Title => next.title = value,
            NoteField::Body => next.body = value,
        }
        next
    }
}

/// Create payload; the store assigns the id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NewNote {
    pub title: String,
    pub body: String,
    pub datetime: String,
    pub book_id: EntityId,
}

/// Editable note fields. The string forms match the editor inputs' `name`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum NoteField {
    Title,
    Body,
}
