use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

// ============ Item ============

/// Opaque item identifier, assigned by the remote resource.
///
/// Servers commonly hand out either numeric or string ids; both are accepted
/// and serialized back in the same JSON form they arrived in. Clients never
/// construct ids themselves except in tests and when echoing a server value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// JSON number id (e.g. `1`), kept exactly as received, so ids beyond
    /// `i64` or with a fraction still round-trip.
    Number(Number),
    /// JSON string id (e.g. `"a1b2"`).
    Text(String),
}

impl ItemId {
    /// Id as it appears in a URL path segment, percent-encoded.
    #[must_use]
    pub fn to_path_segment(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => urlencoding::encode(s).into_owned(),
        }
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A named item as returned by the remote resource.
///
/// Unknown fields in the response are ignored. A missing or `null` name is
/// read as an empty string so one malformed row does not fail the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier.
    pub id: ItemId,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Request body for create and update calls: `{"name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub name: String,
}

impl ItemPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
