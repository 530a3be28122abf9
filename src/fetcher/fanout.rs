use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use tokio::sync::Semaphore;
use url::Url;

use crate::app::{Result, SluiceError};
use crate::config::{BodyPolicy, FetchConfig};
use crate::domain::{FetchOutcome, FetchResult, ResultSet, TargetSpec};
use crate::fetcher::{HttpTransport, Transport};

/// Shape of the seed response body: `{"urls": [{"url": "..."}, ...]}`.
#[derive(Debug, Deserialize)]
struct SeedList {
    urls: Vec<SeedEntry>,
}

#[derive(Debug, Deserialize)]
struct SeedEntry {
    url: String,
}

/// Bounded-concurrency fan-out fetcher.
///
/// Resolves a seed URL into targets, then fetches every target with at most
/// `max_concurrency` requests in flight. Each target's outcome lands in its
/// own result slot; failures never cross slots.
pub struct Fetcher {
    transport: Arc<dyn Transport + Send + Sync>,
    policy: BodyPolicy,
    timeout: Option<Duration>,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport + Send + Sync>) -> Self {
        Self::with_policy(transport, BodyPolicy::Raw)
    }

    pub fn with_policy(transport: Arc<dyn Transport + Send + Sync>, policy: BodyPolicy) -> Self {
        Self {
            transport,
            policy,
            timeout: None,
        }
    }

    /// Per-request deadline, enforced around each transport call. A fired
    /// timeout is a transport failure for that slot only.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// reqwest-backed fetcher honoring the config's timeout and body policy.
    pub fn from_config(config: &FetchConfig) -> Self {
        Self::with_policy(
            Arc::new(HttpTransport::new(config.per_request_timeout)),
            config.body_policy,
        )
        .with_timeout(config.per_request_timeout)
    }

    /// Fetch the seed URL and parse its body as a target list.
    ///
    /// Indices are assigned in parse order, 0-based, and stay stable for the
    /// life of the targets. Errors here are fatal: without a valid list
    /// there is nothing to fetch.
    pub async fn fetch_list(&self, seed_url: &str) -> Result<Vec<TargetSpec>> {
        Url::parse(seed_url)?;

        let response = self.transport.get(seed_url).await?;
        let parsed: SeedList = serde_json::from_slice(&response.body)?;

        tracing::debug!("Seed {} resolved to {} targets", seed_url, parsed.urls.len());

        Ok(parsed
            .urls
            .into_iter()
            .enumerate()
            .map(|(index, entry)| TargetSpec::new(index, entry.url))
            .collect())
    }

    /// Fetch every target, admitting at most `max_concurrency` requests in
    /// flight at any instant.
    ///
    /// Returns only once every target has produced exactly one result.
    /// Result slots are ordered by target index, not completion order.
    pub async fn fetch_all(&self, targets: Vec<TargetSpec>, max_concurrency: usize) -> ResultSet {
        if targets.is_empty() {
            return ResultSet::default();
        }

        let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));
        let mut indices = Vec::with_capacity(targets.len());
        let mut handles = Vec::with_capacity(targets.len());

        for target in targets {
            let transport = self.transport.clone();
            let semaphore = semaphore.clone();
            let policy = self.policy;
            let timeout = self.timeout;

            indices.push(target.index);
            handles.push(tokio::spawn(async move {
                let _permit = semaphore.acquire().await.expect("Semaphore closed");
                fetch_single(&transport, &target, policy, timeout).await
            }));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (position, joined) in futures::future::join_all(handles).await.into_iter().enumerate() {
            match joined {
                Ok(result) => results.push(result),
                Err(e) => {
                    // The slot still has to be filled: one result per target.
                    tracing::error!("Task join error: {}", e);
                    results.push(FetchResult {
                        index: indices[position],
                        outcome: FetchOutcome::Transport {
                            message: format!("task aborted: {e}"),
                        },
                    });
                }
            }
        }

        results.sort_by_key(|r| r.index);

        let failed = results.iter().filter(|r| r.error().is_some()).count();
        tracing::info!("Fetched {} targets, {} failed", results.len(), failed);

        ResultSet::new(results)
    }

    /// End-to-end: resolve the seed list, then fan out.
    pub async fn run(&self, config: &FetchConfig) -> Result<ResultSet> {
        let targets = self.fetch_list(&config.seed_url).await?;
        Ok(self.fetch_all(targets, config.max_concurrency).await)
    }
}

async fn fetch_single(
    transport: &Arc<dyn Transport + Send + Sync>,
    target: &TargetSpec,
    policy: BodyPolicy,
    timeout: Option<Duration>,
) -> FetchResult {
    let attempt = transport.get(&target.url);
    let attempt = match timeout {
        Some(limit) => match tokio::time::timeout(limit, attempt).await {
            Ok(result) => result,
            Err(_) => Err(SluiceError::Transport(format!(
                "request timed out after {limit:?}"
            ))),
        },
        None => attempt.await,
    };

    let outcome = match attempt {
        Ok(response) => {
            tracing::debug!(
                "Got response for {} {}: status {}",
                target.index,
                target.url,
                response.status
            );
            interpret_body(response.status, response.body, policy)
        }
        Err(e) => {
            tracing::warn!("Transport failure for {} {}: {}", target.index, target.url, e);
            FetchOutcome::Transport {
                message: e.to_string(),
            }
        }
    };

    FetchResult {
        index: target.index,
        outcome,
    }
}

fn interpret_body(status: u16, bytes: Vec<u8>, policy: BodyPolicy) -> FetchOutcome {
    match policy {
        BodyPolicy::Raw => FetchOutcome::Body { status, bytes },
        BodyPolicy::JsonStrict => match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(_) => FetchOutcome::Body { status, bytes },
            Err(e) => FetchOutcome::Parse {
                status,
                message: e.to_string(),
            },
        },
    }
}
