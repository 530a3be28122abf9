//! Fetch options recognized by sluice.
//!
//! There is no configuration file; callers construct a [`FetchConfig`] and
//! hand it to [`Fetcher::run`](crate::fetcher::fanout::Fetcher::run).

use std::time::Duration;

/// Default ceiling on simultaneously in-flight requests.
pub const DEFAULT_MAX_CONCURRENCY: usize = 100;

/// How target response bodies are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyPolicy {
    /// Record every received body verbatim, whatever its content or status.
    #[default]
    Raw,
    /// Require each body to decode as JSON; an undecodable body is recorded
    /// as a parse error in that target's slot (status preserved).
    JsonStrict,
}

/// Recognized fetch options.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// URL whose response body holds the target list.
    pub seed_url: String,
    /// Maximum number of requests in flight at any instant. Must be > 0.
    pub max_concurrency: usize,
    /// Per-request timeout; `None` disables the timeout. A fired timeout is
    /// a transport failure for that slot only.
    pub per_request_timeout: Option<Duration>,
    /// Body interpretation policy for target responses.
    pub body_policy: BodyPolicy,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            seed_url: String::new(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            per_request_timeout: None,
            body_policy: BodyPolicy::default(),
        }
    }
}

impl FetchConfig {
    pub fn new(seed_url: impl Into<String>) -> Self {
        Self {
            seed_url: seed_url.into(),
            ..Self::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.per_request_timeout = Some(timeout);
        self
    }
}
