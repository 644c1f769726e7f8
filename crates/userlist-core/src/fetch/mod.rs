//! Fetcher: one GET of the users collection, surfaced as a lazy async outcome.
//!
//! Transport errors, non-2xx statuses and undecodable bodies are distinct
//! [`FetchError`]s inside this module, but callers of [`fetch_users`] only see
//! [`FetchOutcome::Failure`]. The concrete cause is logged before it is dropped.

mod http;

pub use http::{get_body, HttpOptions};

use crate::collection::{parse_collection, Collection};
use crate::config::UserlistConfig;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (connection refused, DNS, timeout, ...).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Body is not a collection+JSON users document.
    #[error("decode: {0}")]
    Decode(#[from] serde_json::Error),
    /// Blocking fetch task panicked or was cancelled.
    #[error("fetch task: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Result of one fetch. Failure deliberately carries no detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(Collection),
    Failure,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

impl From<Result<Collection, FetchError>> for FetchOutcome {
    fn from(result: Result<Collection, FetchError>) -> Self {
        match result {
            Ok(collection) => FetchOutcome::Success(collection),
            Err(e) => {
                tracing::warn!(error = %e, "users fetch failed");
                FetchOutcome::Failure
            }
        }
    }
}

/// Where a fetch cycle gets its collection from. `fetch` blocks; it runs on
/// the tokio blocking pool.
pub trait UserSource: Send + Sync + 'static {
    fn fetch(&self) -> Result<Collection, FetchError>;
}

/// Fetches the collection over HTTP from a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpUserSource {
    endpoint: String,
    opts: HttpOptions,
}

impl HttpUserSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            opts: HttpOptions::default(),
        }
    }

    pub fn from_config(cfg: &UserlistConfig) -> Self {
        Self {
            endpoint: cfg.endpoint.clone(),
            opts: HttpOptions {
                timeout: cfg.request_timeout(),
            },
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl UserSource for HttpUserSource {
    fn fetch(&self) -> Result<Collection, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "GET users collection");
        let body = get_body(&self.endpoint, self.opts)?;
        let collection = parse_collection(&body)?;
        tracing::debug!(items = collection.items.len(), "users collection decoded");
        Ok(collection)
    }
}

/// Issue exactly one fetch. Nothing is sent until the returned future is polled.
pub async fn fetch_users<S: UserSource>(source: Arc<S>) -> FetchOutcome {
    let joined = tokio::task::spawn_blocking(move || source.fetch()).await;
    FetchOutcome::from(joined.map_err(FetchError::from).and_then(|result| result))
}
