//! # Client Configuration
//!
//! Configuration management for the StepUp client.
//! Supports a TOML config file and `STEPUP_*` environment variable overrides.
//!
//! The API host is chosen from a two-valued environment switch that is decided
//! once per process by [`ApiEnvironment::resolve`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::error::ClientResult;

const ENV_PREFIX: &str = "STEPUP";
const DEFAULT_CONFIG_FILE: &str = "stepup-client";

static PROCESS_ENVIRONMENT: OnceLock<ApiEnvironment> = OnceLock::new();

/// Deployment the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiEnvironment {
    Test,
    Production,
}

impl ApiEnvironment {
    /// Host serving this environment's API
    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            ApiEnvironment::Test => "rankme-test.herokuapp.com",
            ApiEnvironment::Production => "rankme-prod.herokuapp.com",
        }
    }

    /// Environment implied by the build profile
    #[must_use]
    pub fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            ApiEnvironment::Test
        } else {
            ApiEnvironment::Production
        }
    }

    /// Fix the process-wide environment on first call and return it.
    ///
    /// The first caller's preference wins; without one the build profile decides.
    /// Every later call returns the same value.
    pub fn resolve(preferred: Option<ApiEnvironment>) -> ApiEnvironment {
        let resolved =
            *PROCESS_ENVIRONMENT.get_or_init(|| preferred.unwrap_or_else(Self::from_build_profile));

        if let Some(preferred) = preferred {
            if preferred != resolved {
                warn!(
                    requested = %preferred,
                    active = %resolved,
                    "API environment already fixed for this process, ignoring request"
                );
            }
        }

        resolved
    }
}

impl fmt::Display for ApiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiEnvironment::Test => write!(f, "test"),
            ApiEnvironment::Production => write!(f, "production"),
        }
    }
}

/// Client configuration for API connections
///
/// # Examples
///
/// ```rust
/// use stepup_client::config::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.timeout_ms, 30000);
/// assert!(config.host.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Preferred environment; only honoured if the process has not fixed one yet
    pub environment: Option<ApiEnvironment>,
    /// Explicit API host, bypassing the environment table (e.g. a local proxy)
    pub host: Option<String>,
    /// Transport request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            environment: None,
            host: None,
            timeout_ms: 30000,
        }
    }
}

impl ClientConfig {
    /// Load configuration from the working directory and environment variables
    ///
    /// Precedence (highest to lowest):
    /// 1. `STEPUP_*` environment variables
    /// 2. `./stepup-client.toml` (optional)
    /// 3. Default values
    pub fn load() -> ClientResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        debug!(?config, "Loaded client configuration");
        Ok(config)
    }

    /// Load configuration from a specific TOML file, still honouring env overrides
    pub fn load_from_file(path: &Path) -> ClientResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        debug!(path = %path.display(), ?config, "Loaded client configuration from file");
        Ok(config)
    }

    /// Host every request of this client is sent to
    #[must_use]
    pub fn resolve_host(&self) -> String {
        match &self.host {
            Some(host) => host.clone(),
            None => ApiEnvironment::resolve(self.environment).host().to_string(),
        }
    }
}
