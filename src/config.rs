//! Runtime configuration for the catalog client.
//!
//! The endpoint is resolved in this order:
//!
//! 1. `--endpoint` on the command line
//! 2. `QOCAT_ENDPOINT` in the environment (a `.env` file is honoured)
//! 3. the public OCat details service
//!
//! Only this module reads the environment. The fetcher and parser take every
//! input as an explicit argument.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::{OcatError, Result};

pub const DEFAULT_SERVER: &str = "cda.harvard.edu";
pub const DEFAULT_SERVICE: &str = "srservices/ocatDetails.do";
pub const ENDPOINT_ENV_VAR: &str = "QOCAT_ENDPOINT";

/// `https://cda.harvard.edu/srservices/ocatDetails.do`
pub fn default_endpoint() -> String {
    format!("https://{DEFAULT_SERVER}/{DEFAULT_SERVICE}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcatConfig {
    pub endpoint: Url,
    /// Overall request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
}

impl Default for OcatConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(&default_endpoint()).expect("default endpoint is a valid URL"),
            timeout: None,
        }
    }
}

impl OcatConfig {
    /// Resolve configuration from CLI overrides, then the environment.
    pub fn from_env(endpoint_flag: Option<&str>, timeout_secs: Option<u64>) -> Result<Self> {
        dotenvy::dotenv().ok();
        let env_endpoint = std::env::var(ENDPOINT_ENV_VAR).ok();
        Self::resolve(endpoint_flag, env_endpoint.as_deref(), timeout_secs)
    }

    /// Pure resolution step behind `from_env`.
    pub fn resolve(
        endpoint_flag: Option<&str>,
        env_endpoint: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Result<Self> {
        let (raw, source) = match (endpoint_flag, env_endpoint) {
            (Some(flag), _) => (flag.to_string(), "--endpoint"),
            (None, Some(env)) if !env.trim().is_empty() => (env.trim().to_string(), ENDPOINT_ENV_VAR),
            _ => (default_endpoint(), "default"),
        };

        let endpoint = parse_endpoint(&raw)?;
        debug!(endpoint = %endpoint, source, "resolved catalog endpoint");

        let timeout = match timeout_secs {
            Some(0) => return Err(OcatError::config("--timeout must be at least 1 second")),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self { endpoint, timeout })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)
        .map_err(|e| OcatError::config(format!("Invalid endpoint URL '{raw}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(OcatError::config(format!(
            "Unsupported endpoint scheme '{other}' in '{raw}' (expected http or https)"
        ))),
    }
}
