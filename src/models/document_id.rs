use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Server document identifier, sent as `id`, `_id` or both.
///
/// Flattened into each model so payloads carrying both keys still decode.
/// `id` wins when both are present, and the value is always written back as `id`.
#[derive(Debug, Clone, Default, Eq, Deserialize)]
pub struct DocumentId {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
}

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            object_id: None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.id.as_deref().or(self.object_id.as_deref())
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.as_str().is_none()
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let id = self.as_str();
        let mut map = serializer.serialize_map(Some(usize::from(id.is_some())))?;
        if let Some(id) = id {
            map.serialize_entry("id", id)?;
        }
        map.end()
    }
}

impl PartialEq for DocumentId {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}
