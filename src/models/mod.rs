//! # Response and Request Models
//!
//! Typed payloads exchanged with the StepUp API. All JSON is camelCase and
//! every date field travels as integer milliseconds since the Unix epoch.

pub mod document_id;
pub mod feedback;
pub mod organization;
pub mod rank;
pub mod user;

pub use document_id::DocumentId;
pub use feedback::{CreateFeedbackBody, Feedback, FeedbackFilter};
pub use organization::{Area, CompanyValue, Location, Reference};
pub use rank::Rank;
pub use user::{LoggedInUser, UserSummary};
