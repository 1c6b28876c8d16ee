use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{
    Area, CompanyValue, CreateFeedbackBody, Feedback, FeedbackFilter, Location, LoggedInUser,
    Rank, UserSummary,
};

/// Operations the StepUp API exposes to callers.
///
/// Each call fetches a fresh token, sends exactly one request and completes once
/// with either the decoded value or a [`ClientError`](crate::ClientError).
#[async_trait]
pub trait ApiClientFacade: Send + Sync {
    // ===================================================================================
    // ORGANIZATION
    // ===================================================================================

    async fn all_company_areas(&self) -> ClientResult<Vec<Area>>;

    async fn all_company_locations(&self) -> ClientResult<Vec<Location>>;

    async fn all_company_values(&self) -> ClientResult<Vec<CompanyValue>>;

    // ===================================================================================
    // LOGGED IN USER
    // ===================================================================================

    async fn user_information(&self) -> ClientResult<LoggedInUser>;

    /// First-time registration of the signed-in user's location and area.
    async fn register_user(&self, location: &str, area: &str) -> ClientResult<LoggedInUser>;

    async fn update_user(&self, location: &str, area: &str) -> ClientResult<LoggedInUser>;

    async fn relevant_contacts(&self) -> ClientResult<Vec<UserSummary>>;

    // ===================================================================================
    // FEEDBACK
    // ===================================================================================

    async fn feedbacks(&self, filter: &FeedbackFilter) -> ClientResult<Vec<Feedback>>;

    async fn create_feedback(&self, body: &CreateFeedbackBody) -> ClientResult<Feedback>;

    async fn like_feedback(&self, feedback_id: &str) -> ClientResult<Feedback>;

    async fn flag_feedback(&self, feedback_id: &str) -> ClientResult<Feedback>;

    // ===================================================================================
    // RANKINGS
    // ===================================================================================

    async fn rankings(
        &self,
        page: &str,
        value: &str,
        location: &str,
        area: &str,
    ) -> ClientResult<Vec<Rank>>;
}
