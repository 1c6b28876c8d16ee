//! Mock collaborators for exercising `ApiClient` without a network.
//!
//! `SpyTransport` records every request it is handed and answers with scripted
//! responses; `ScriptedTokenProvider` counts token requests and can be told to fail.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use stepup_client::{
    ApiClient, ClientError, ClientResult, RequestBuilder, RequestSpec, SecureToken, TokenError,
    TokenProvider, Transport, TransportResponse,
};

pub const TEST_HOST: &str = "rankme-test.herokuapp.com";
pub const TEST_TOKEN: &str = "eyJ0eXAiOiJKV1QifQ.test";

/// Scripted reply for one `send` call
#[derive(Debug, Clone)]
pub enum MockReply {
    Respond(TransportResponse),
    Fail(String),
}

/// Transport that records requests instead of sending them
#[derive(Debug, Default)]
pub struct SpyTransport {
    requests: Mutex<Vec<RequestSpec>>,
    replies: Mutex<VecDeque<MockReply>>,
    fallback: Mutex<Option<MockReply>>,
    delay: Option<Duration>,
}

impl SpyTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every request with `status` and `body`
    pub fn responding(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let spy = Self::new();
        *spy.fallback.lock().unwrap() =
            Some(MockReply::Respond(TransportResponse::new(status, body)));
        spy
    }

    /// Answer every request with `body` serialized as JSON and a 200 status
    pub fn responding_json(body: serde_json::Value) -> Self {
        Self::responding(200, serde_json::to_vec(&body).unwrap())
    }

    /// Fail every request with a network error
    pub fn failing(message: impl Into<String>) -> Self {
        let spy = Self::new();
        *spy.fallback.lock().unwrap() = Some(MockReply::Fail(message.into()));
        spy
    }

    /// Queue a reply used before the fallback
    pub fn push_reply(&self, reply: MockReply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// Hold each request for `delay` before replying
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> RequestSpec {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl Transport for SpyTransport {
    async fn send(&self, request: RequestSpec) -> ClientResult<TransportResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fallback.lock().unwrap().clone())
            .unwrap_or_else(|| MockReply::Respond(TransportResponse::new(200, "null")));

        match reply {
            MockReply::Respond(response) => Ok(response),
            MockReply::Fail(message) => Err(ClientError::network(message)),
        }
    }
}

/// Token provider that hands out numbered tokens or fails on demand
#[derive(Debug)]
pub struct ScriptedTokenProvider {
    failure: Option<TokenError>,
    calls: AtomicUsize,
    numbered: bool,
}

impl ScriptedTokenProvider {
    /// Always returns `TEST_TOKEN`
    pub fn fixed() -> Self {
        Self {
            failure: None,
            calls: AtomicUsize::new(0),
            numbered: false,
        }
    }

    /// Returns `token-1`, `token-2`, ... one per call
    pub fn numbered() -> Self {
        Self {
            numbered: true,
            ..Self::fixed()
        }
    }

    pub fn failing(error: TokenError) -> Self {
        Self {
            failure: Some(error),
            ..Self::fixed()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenProvider for ScriptedTokenProvider {
    async fn retrieve_token(&self) -> Result<SecureToken, TokenError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if self.numbered {
            Ok(SecureToken::new(format!("token-{}", call)))
        } else {
            Ok(SecureToken::new(TEST_TOKEN))
        }
    }
}

/// Client wired to the given spies against `TEST_HOST`
pub fn client_with(
    tokens: Arc<ScriptedTokenProvider>,
    transport: Arc<SpyTransport>,
) -> ApiClient {
    ApiClient::new(tokens, transport, RequestBuilder::new(TEST_HOST))
}
