//! Networked [`RangeClient`] for the Pwned Passwords range API.
//!
//! One GET of `{base}/range/{prefix}` per call; only the 5-character
//! hash prefix ever goes on the wire. Response bodies are parsed by
//! the core crate, so a garbled body surfaces as a parse error and
//! stays distinguishable from a transport failure. Retry policy, if
//! any, belongs here rather than in the engine; none is applied.

use pwncheck::{Error, RangeClient, RangeMap, parse_range_body};
use tracing::debug;

/// Public Pwned Passwords endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.pwnedpasswords.com";

const USER_AGENT: &str = concat!("pwncheck/", env!("CARGO_PKG_VERSION"));

/// The underlying HTTP client could not be constructed.
#[derive(Debug, thiserror::Error)]
#[error("failed to build HTTP client: {0}")]
pub struct BuildError(#[from] reqwest::Error);

/// Non-success HTTP response, preserved with its body for diagnosis.
///
/// Reaches callers boxed inside [`Error::Transport`]; a non-2xx status
/// is never folded into "zero entries".
#[derive(Debug, thiserror::Error)]
#[error("HTTP {status}; body: <{body}>")]
pub struct StatusError {
    pub status: u16,
    pub body: String,
}

/// Thin client for the Pwned Passwords `/range` endpoint.
#[derive(Debug, Clone)]
pub struct PwnedPasswords {
    client: reqwest::Client,
    base_url: String,
}

impl PwnedPasswords {
    /// Client for the public service.
    pub fn new() -> Result<Self, BuildError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for an alternate endpoint, e.g. a self-hosted mirror or
    /// a test server. A trailing slash on `base_url` is ignored.
    pub fn with_base_url(base_url: &str) -> Result<Self, BuildError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }
}

impl RangeClient for PwnedPasswords {
    async fn range(&self, prefix: &str) -> Result<RangeMap, Error> {
        let url = format!("{}/range/{}", self.base_url, prefix);
        debug!(prefix, "requesting range");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| transport(prefix, source))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(transport(prefix, StatusError { status: status.as_u16(), body }));
        }

        let body = response.text().await.map_err(|source| transport(prefix, source))?;
        debug!(prefix, bytes = body.len(), "range response received");
        parse_range_body(&body)
    }
}

fn transport(prefix: &str, source: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::Transport { prefix: prefix.to_string(), source: Box::new(source) }
}
