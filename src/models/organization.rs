use serde::{Deserialize, Serialize};

use super::document_id::DocumentId;

/// Company area (department) a user belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    #[serde(flatten)]
    pub id: DocumentId,
    #[serde(default)]
    pub name: Option<String>,
}

/// Office location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(flatten)]
    pub id: DocumentId,
    #[serde(default)]
    pub name: Option<String>,
}

/// Company value feedback is given against (e.g. "teamwork")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyValue {
    #[serde(flatten)]
    pub id: DocumentId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A related resource that the server sends either as a bare id or populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Id(String),
    Populated(T),
}

impl<T> Reference<T> {
    #[must_use]
    pub fn populated(&self) -> Option<&T> {
        match self {
            Reference::Id(_) => None,
            Reference::Populated(value) => Some(value),
        }
    }
}
