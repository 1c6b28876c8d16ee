//! # StepUp API Client
//!
//! Token-gated HTTP client for every StepUp endpoint. Each operation runs the same
//! pipeline: fetch a fresh bearer token, build the [`RequestSpec`], dispatch it over
//! the [`Transport`], and decode the JSON body into the operation's response type.
//!
//! No retries, caching or partial results: the first failure ends the call.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::api_clients::facade::ApiClientFacade;
use crate::auth::{SecureToken, TokenProvider};
use crate::config::ClientConfig;
use crate::endpoint::{Endpoint, HttpBody, RequestBuilder, RequestSpec, UrlParameters};
use crate::error::{ClientError, ClientResult};
use crate::models::{
    Area, CompanyValue, CreateFeedbackBody, Feedback, FeedbackFilter, Location, LoggedInUser,
    Rank, UserSummary,
};
use crate::transport::{ReqwestTransport, Transport};

const LOCATION_KEY: &str = "location";
const AREA_KEY: &str = "area";
const PAGE_KEY: &str = "page";
const VALUE_KEY: &str = "value";

/// HTTP client for the StepUp API
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use stepup_client::{ApiClient, ApiClientFacade, ClientConfig, EnvTokenProvider};
///
/// # async fn example() -> stepup_client::ClientResult<()> {
/// let config = ClientConfig::load()?;
/// let client = ApiClient::from_config(&config, Arc::new(EnvTokenProvider::new()))?;
///
/// for area in client.all_company_areas().await? {
///     println!("{:?}", area.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    token_provider: Arc<dyn TokenProvider>,
    transport: Arc<dyn Transport>,
    requests: RequestBuilder,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("host", &self.requests.host())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Assemble a client from its collaborators
    pub fn new(
        token_provider: Arc<dyn TokenProvider>,
        transport: Arc<dyn Transport>,
        requests: RequestBuilder,
    ) -> Self {
        Self {
            token_provider,
            transport,
            requests,
        }
    }

    /// Create a client that talks HTTPS through reqwest to the configured host
    pub fn from_config(
        config: &ClientConfig,
        token_provider: Arc<dyn TokenProvider>,
    ) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(config)?;
        let requests = RequestBuilder::from_config(config);

        info!(
            host = %requests.host(),
            timeout_ms = config.timeout_ms,
            "Created StepUp API client"
        );

        Ok(Self::new(token_provider, Arc::new(transport), requests))
    }

    /// Host every request is sent to
    #[must_use]
    pub fn host(&self) -> &str {
        self.requests.host()
    }

    // ===================================================================================
    // PIPELINE
    // ===================================================================================

    /// Token, build, dispatch, decode. The only place a request leaves the client.
    async fn execute<T, F>(
        &self,
        operation: &'static str,
        endpoint: F,
        parameters: Option<UrlParameters>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
        F: FnOnce(SecureToken) -> Endpoint + Send,
    {
        let token = self.token_provider.retrieve_token().await.map_err(|e| {
            warn!(operation = operation, error = %e, "Token acquisition failed, request not sent");
            ClientError::unable_to_make_request(e.to_string())
        })?;

        let request = self.requests.build(&endpoint(token), parameters.as_ref())?;
        self.dispatch(operation, request).await
    }

    async fn dispatch<T>(&self, operation: &'static str, request: RequestSpec) -> ClientResult<T>
    where
        T: DeserializeOwned + Send,
    {
        debug!(
            operation = operation,
            method = %request.method,
            url = %request.url,
            "Dispatching StepUp API request"
        );

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let message = response.body_text();
            warn!(
                operation = operation,
                status = response.status,
                error = %message,
                "StepUp API returned an error status"
            );
            return Err(ClientError::http_status(response.status, message));
        }

        let decoded = decode(operation, &response.body)?;
        debug!("Successfully completed operation: {}", operation);
        Ok(decoded)
    }
}

/// Decode a response body; all date fields are millisecond epoch integers
pub(crate) fn decode<T: DeserializeOwned>(operation: &str, body: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        error!(operation = operation, error = %e, "Failed to decode response body");
        ClientError::decoding_failed(operation, e)
    })
}

fn user_body(location: &str, area: &str) -> HttpBody {
    HttpBody::from([
        (LOCATION_KEY.to_string(), location.to_string()),
        (AREA_KEY.to_string(), area.to_string()),
    ])
}

#[async_trait]
impl ApiClientFacade for ApiClient {
    async fn all_company_areas(&self) -> ClientResult<Vec<Area>> {
        self.execute("areas", Endpoint::Area, None).await
    }

    async fn all_company_locations(&self) -> ClientResult<Vec<Location>> {
        self.execute("locations", Endpoint::Location, None).await
    }

    async fn all_company_values(&self) -> ClientResult<Vec<CompanyValue>> {
        self.execute("company values", Endpoint::CompanyValues, None)
            .await
    }

    async fn user_information(&self) -> ClientResult<LoggedInUser> {
        self.execute("user information", Endpoint::LoggedInUser, None)
            .await
    }

    async fn register_user(&self, location: &str, area: &str) -> ClientResult<LoggedInUser> {
        let body = user_body(location, area);
        self.execute(
            "register user",
            move |token| Endpoint::NewLocalUser(token, body),
            None,
        )
        .await
    }

    async fn update_user(&self, location: &str, area: &str) -> ClientResult<LoggedInUser> {
        let body = user_body(location, area);
        self.execute(
            "update user",
            move |token| Endpoint::UpdateLocalUser(token, body),
            None,
        )
        .await
    }

    async fn relevant_contacts(&self) -> ClientResult<Vec<UserSummary>> {
        self.execute("relevant contacts", Endpoint::Contacts, None)
            .await
    }

    async fn feedbacks(&self, filter: &FeedbackFilter) -> ClientResult<Vec<Feedback>> {
        self.execute(
            "feedbacks",
            Endpoint::Feedback,
            Some(filter.to_query_parameters()),
        )
        .await
    }

    async fn create_feedback(&self, body: &CreateFeedbackBody) -> ClientResult<Feedback> {
        let body = body.to_http_body();
        self.execute(
            "create feedback",
            move |token| Endpoint::NewFeedback(token, body),
            None,
        )
        .await
    }

    async fn like_feedback(&self, feedback_id: &str) -> ClientResult<Feedback> {
        let feedback_id = feedback_id.to_string();
        self.execute(
            "like feedback",
            move |token| Endpoint::LikeFeedback(token, feedback_id),
            None,
        )
        .await
    }

    async fn flag_feedback(&self, feedback_id: &str) -> ClientResult<Feedback> {
        let feedback_id = feedback_id.to_string();
        self.execute(
            "flag feedback",
            move |token| Endpoint::FlagFeedback(token, feedback_id),
            None,
        )
        .await
    }

    async fn rankings(
        &self,
        page: &str,
        value: &str,
        location: &str,
        area: &str,
    ) -> ClientResult<Vec<Rank>> {
        let parameters = UrlParameters::from([
            (PAGE_KEY.to_string(), page.to_string()),
            (VALUE_KEY.to_string(), value.to_string()),
            (LOCATION_KEY.to_string(), location.to_string()),
            (AREA_KEY.to_string(), area.to_string()),
        ]);
        self.execute("rankings", Endpoint::Rankings, Some(parameters))
            .await
    }
}
