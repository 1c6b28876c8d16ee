//! # Endpoint Requests
//!
//! Pure mapping from an [`Endpoint`] (which carries its own token and body) plus
//! optional query parameters to a fully formed [`RequestSpec`].
//!
//! | Endpoint | Method | Path |
//! |---|---|---|
//! | `Area` | GET | /area |
//! | `Location` | GET | /location |
//! | `CompanyValues` | GET | /value |
//! | `LoggedInUser` | GET | /me |
//! | `NewLocalUser` | POST | /me |
//! | `UpdateLocalUser` | PUT | /me |
//! | `Contacts` | GET | /people/relevant-contacts |
//! | `Feedback` | GET | /feedback |
//! | `NewFeedback` | POST | /feedback |
//! | `LikeFeedback` | PUT | /feedback/{id}/like |
//! | `FlagFeedback` | PUT | /feedback/{id}/flag |
//! | `Rankings` | GET | /rank |

use reqwest::Url;
use std::collections::HashMap;
use std::fmt;

use crate::auth::SecureToken;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// JSON object body of mutating endpoints
pub type HttpBody = HashMap<String, String>;

/// Query parameters; the order they reach the wire in is unspecified
pub type UrlParameters = HashMap<String, String>;

pub const AUTHORIZATION_HEADER: &str = "Authorization";

const SCHEME: &str = "https";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical server operation with everything needed to build its request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Area(SecureToken),
    Location(SecureToken),
    LoggedInUser(SecureToken),
    NewLocalUser(SecureToken, HttpBody),
    UpdateLocalUser(SecureToken, HttpBody),
    CompanyValues(SecureToken),
    Contacts(SecureToken),
    Feedback(SecureToken),
    NewFeedback(SecureToken, HttpBody),
    /// Feedback id
    LikeFeedback(SecureToken, String),
    /// Feedback id
    FlagFeedback(SecureToken, String),
    Rankings(SecureToken),
}

impl Endpoint {
    #[must_use]
    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::Area(_)
            | Endpoint::Location(_)
            | Endpoint::LoggedInUser(_)
            | Endpoint::CompanyValues(_)
            | Endpoint::Contacts(_)
            | Endpoint::Feedback(_)
            | Endpoint::Rankings(_) => HttpMethod::Get,
            Endpoint::NewLocalUser(..) | Endpoint::NewFeedback(..) => HttpMethod::Post,
            Endpoint::UpdateLocalUser(..)
            | Endpoint::LikeFeedback(..)
            | Endpoint::FlagFeedback(..) => HttpMethod::Put,
        }
    }

    #[must_use]
    pub fn token(&self) -> &SecureToken {
        match self {
            Endpoint::Area(token)
            | Endpoint::Location(token)
            | Endpoint::LoggedInUser(token)
            | Endpoint::NewLocalUser(token, _)
            | Endpoint::UpdateLocalUser(token, _)
            | Endpoint::CompanyValues(token)
            | Endpoint::Contacts(token)
            | Endpoint::Feedback(token)
            | Endpoint::NewFeedback(token, _)
            | Endpoint::LikeFeedback(token, _)
            | Endpoint::FlagFeedback(token, _)
            | Endpoint::Rankings(token) => token,
        }
    }

    #[must_use]
    pub fn body(&self) -> Option<&HttpBody> {
        match self {
            Endpoint::NewLocalUser(_, body)
            | Endpoint::UpdateLocalUser(_, body)
            | Endpoint::NewFeedback(_, body) => Some(body),
            _ => None,
        }
    }

    /// Unescaped path segments. Identifiers are percent-encoded when joined,
    /// except for empty and dot segments, which `url_for` rejects.
    fn path_segments(&self) -> Vec<&str> {
        match self {
            Endpoint::Area(_) => vec!["area"],
            Endpoint::Location(_) => vec!["location"],
            Endpoint::LoggedInUser(_) | Endpoint::NewLocalUser(..) | Endpoint::UpdateLocalUser(..) => {
                vec!["me"]
            }
            Endpoint::CompanyValues(_) => vec!["value"],
            Endpoint::Contacts(_) => vec!["people", "relevant-contacts"],
            Endpoint::Feedback(_) | Endpoint::NewFeedback(..) => vec!["feedback"],
            Endpoint::LikeFeedback(_, id) => vec!["feedback", id.as_str(), "like"],
            Endpoint::FlagFeedback(_, id) => vec!["feedback", id.as_str(), "flag"],
            Endpoint::Rankings(_) => vec!["rank"],
        }
    }
}

/// Fully formed, immutable description of one HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl RequestSpec {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Decoded query parameters
    #[must_use]
    pub fn query_parameters(&self) -> UrlParameters {
        self.url.query_pairs().into_owned().collect()
    }
}

/// Stateless builder bound to one API host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestBuilder {
    host: String,
}

impl RequestBuilder {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.resolve_host())
    }

    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Build the request for `endpoint`, appending `parameters` to the query string
    pub fn build(
        &self,
        endpoint: &Endpoint,
        parameters: Option<&UrlParameters>,
    ) -> ClientResult<RequestSpec> {
        let url = self.url_for(endpoint, parameters)?;

        let headers = HashMap::from([(
            AUTHORIZATION_HEADER.to_string(),
            format!("Bearer {}", endpoint.token().as_str()),
        )]);

        let body = match endpoint.body() {
            Some(body) => Some(serde_json::to_vec(body).map_err(ClientError::BodyEncodingFailed)?),
            None => None,
        };

        Ok(RequestSpec {
            method: endpoint.method(),
            url,
            headers,
            body,
        })
    }

    fn url_for(&self, endpoint: &Endpoint, parameters: Option<&UrlParameters>) -> ClientResult<Url> {
        let mut url = Url::parse(&format!("{}://{}", SCHEME, self.host)).map_err(|e| {
            ClientError::malformed_request(format!("Invalid API host '{}': {}", self.host, e))
        })?;

        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(ClientError::malformed_request(format!(
                "API host '{}' must not carry a path, query or fragment",
                self.host
            )));
        }

        if !url.username().is_empty() || url.password().is_some() {
            return Err(ClientError::malformed_request(
                "API host must not carry credentials",
            ));
        }

        let segments = endpoint.path_segments();
        if let Some(segment) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(ClientError::malformed_request(format!(
                "Invalid path segment {:?} for {} request",
                segment,
                endpoint.method()
            )));
        }

        url.path_segments_mut()
            .map_err(|()| {
                ClientError::malformed_request(format!("API host '{}' cannot be a base", self.host))
            })?
            .clear()
            .extend(segments);

        if let Some(parameters) = parameters.filter(|p| !p.is_empty()) {
            url.query_pairs_mut().extend_pairs(parameters.iter());
        }

        Ok(url)
    }
}
