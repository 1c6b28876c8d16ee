use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::document_id::DocumentId;
use super::organization::CompanyValue;
use super::user::UserSummary;
use crate::endpoint::{HttpBody, UrlParameters};

const FROM_KEY: &str = "from";
const TO_KEY: &str = "to";
const VALUE_KEY: &str = "value";
const USER_KEY: &str = "user";
const IS_PRIVATE_KEY: &str = "isPrivate";
const IS_PINNED_KEY: &str = "isPinned";
const SKIP_KEY: &str = "skip";
const LIMIT_KEY: &str = "limit";
const COMMENT_KEY: &str = "comment";

/// Feedback one person gave another against a company value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(flatten)]
    pub id: DocumentId,
    /// Absent for anonymous feedback
    #[serde(default)]
    pub from: Option<UserSummary>,
    #[serde(default)]
    pub to: Option<UserSummary>,
    #[serde(default)]
    pub value: Option<CompanyValue>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub likes: Option<u32>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub is_pinned: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Query for the feedback list. Every field is always sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackFilter {
    pub from: String,
    pub to: String,
    pub value: String,
    pub user: String,
    pub is_private: bool,
    pub is_pinned: bool,
    pub skip: u32,
    pub limit: u32,
}

impl FeedbackFilter {
    /// Flatten into query parameters, stringifying every field
    #[must_use]
    pub fn to_query_parameters(&self) -> UrlParameters {
        UrlParameters::from([
            (FROM_KEY.to_string(), self.from.clone()),
            (TO_KEY.to_string(), self.to.clone()),
            (VALUE_KEY.to_string(), self.value.clone()),
            (USER_KEY.to_string(), self.user.clone()),
            (IS_PRIVATE_KEY.to_string(), self.is_private.to_string()),
            (IS_PINNED_KEY.to_string(), self.is_pinned.to_string()),
            (SKIP_KEY.to_string(), self.skip.to_string()),
            (LIMIT_KEY.to_string(), self.limit.to_string()),
        ])
    }
}

/// New feedback for a peer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFeedbackBody {
    /// Recipient user id
    pub to: String,
    /// Company value id
    pub value: String,
    pub comment: String,
    pub is_private: bool,
}

impl CreateFeedbackBody {
    #[must_use]
    pub fn to_http_body(&self) -> HttpBody {
        HttpBody::from([
            (TO_KEY.to_string(), self.to.clone()),
            (VALUE_KEY.to_string(), self.value.clone()),
            (COMMENT_KEY.to_string(), self.comment.clone()),
            (IS_PRIVATE_KEY.to_string(), self.is_private.to_string()),
        ])
    }
}
