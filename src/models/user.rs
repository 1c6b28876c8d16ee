use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document_id::DocumentId;
use super::organization::{Area, Location, Reference};

/// Profile of the signed-in user, returned by `/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggedInUser {
    #[serde(flatten)]
    pub id: DocumentId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<Reference<Location>>,
    #[serde(default)]
    pub area: Option<Reference<Area>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}

impl LoggedInUser {
    /// A user that has not picked a location and area yet still needs registering
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.location.is_some() && self.area.is_some()
    }
}

/// Another person, as embedded in feedback, rankings and contact lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(flatten)]
    pub id: DocumentId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}
