//! # Bearer Token Acquisition
//!
//! The client never stores tokens. Every operation asks its [`TokenProvider`]
//! for a fresh one; caching, refresh and interactive sign-in are the provider's concern.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Environment variable read by [`EnvTokenProvider::new`]
pub const DEFAULT_TOKEN_VAR: &str = "STEPUP_ACCESS_TOKEN";

/// Short-lived bearer credential. `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureToken(String);

impl SecureToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecureToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecureToken([REDACTED])")
    }
}

impl From<String> for SecureToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for SecureToken {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

/// Why a provider could not hand out a token
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("no signed-in account is available")]
    NoActiveAccount,

    #[error("token acquisition failed: {0}")]
    Acquisition(String),
}

/// Source of bearer tokens, shared by all in-flight operations
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn retrieve_token(&self) -> Result<SecureToken, TokenError>;
}

#[async_trait]
impl<P: TokenProvider + ?Sized> TokenProvider for Arc<P> {
    async fn retrieve_token(&self) -> Result<SecureToken, TokenError> {
        (**self).retrieve_token().await
    }
}

/// Always yields the same token (service accounts, tests)
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: SecureToken,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<SecureToken>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn retrieve_token(&self) -> Result<SecureToken, TokenError> {
        Ok(self.token.clone())
    }
}

/// Reads the token from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    variable: String,
}

impl EnvTokenProvider {
    /// Provider backed by `STEPUP_ACCESS_TOKEN`
    pub fn new() -> Self {
        Self::with_variable(DEFAULT_TOKEN_VAR)
    }

    pub fn with_variable(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TokenProvider for EnvTokenProvider {
    async fn retrieve_token(&self) -> Result<SecureToken, TokenError> {
        match std::env::var(&self.variable) {
            Ok(token) if !token.trim().is_empty() => Ok(SecureToken::new(token.trim())),
            Ok(_) | Err(std::env::VarError::NotPresent) => Err(TokenError::NoActiveAccount),
            Err(e) => Err(TokenError::Acquisition(format!("{}: {}", self.variable, e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_token_debug_is_redacted() {
        let token = SecureToken::new("eyJhbGciOi.secret");
        assert_eq!(format!("{:?}", token), "SecureToken([REDACTED])");
        assert_eq!(token.as_str(), "eyJhbGciOi.secret");
    }

    #[test]
    fn test_static_provider() {
        let provider = StaticTokenProvider::new("abc");
        let token = tokio_test::block_on(provider.retrieve_token()).unwrap();
        assert_eq!(token.as_str(), "abc");
    }

    #[tokio::test]
    async fn test_arc_provider_delegates() {
        let provider: Arc<dyn TokenProvider> = Arc::new(StaticTokenProvider::new("shared"));
        let token = provider.retrieve_token().await.unwrap();
        assert_eq!(token.as_str(), "shared");
    }

    #[tokio::test]
    #[serial]
    async fn test_env_provider_reads_fresh_value() {
        let provider = EnvTokenProvider::with_variable("STEPUP_TEST_TOKEN_FRESH");

        std::env::set_var("STEPUP_TEST_TOKEN_FRESH", "first");
        assert_eq!(provider.retrieve_token().await.unwrap().as_str(), "first");

        std::env::set_var("STEPUP_TEST_TOKEN_FRESH", "second");
        assert_eq!(provider.retrieve_token().await.unwrap().as_str(), "second");

        std::env::remove_var("STEPUP_TEST_TOKEN_FRESH");
    }

    #[tokio::test]
    #[serial]
    async fn test_env_provider_missing_or_blank() {
        let provider = EnvTokenProvider::with_variable("STEPUP_TEST_TOKEN_MISSING");

        std::env::remove_var("STEPUP_TEST_TOKEN_MISSING");
        assert_eq!(
            provider.retrieve_token().await.unwrap_err(),
            TokenError::NoActiveAccount
        );

        std::env::set_var("STEPUP_TEST_TOKEN_MISSING", "   ");
        assert_eq!(
            provider.retrieve_token().await.unwrap_err(),
            TokenError::NoActiveAccount
        );
        std::env::remove_var("STEPUP_TEST_TOKEN_MISSING");
    }
}
