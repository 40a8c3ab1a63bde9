//! Catalog store: the one-shot catalog load and its state machine.
//!
//! ```text
//! Idle -> Loading -> Loaded
//!                 \-> Failed
//! ```
//!
//! `Loaded` and `Failed` are terminal for the page lifetime. There is no
//! retry, cancellation or timeout.

use async_trait::async_trait;
use http::StatusCode;
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::LoadError;

/// Raw response from a catalog source.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: StatusCode,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A `200 OK` response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

/// Where the catalog document comes from.
///
/// Futures are not `Send`: the browser implementation runs on the
/// single-threaded UI event loop.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Perform one request for the catalog resource.
    async fn fetch(&self) -> Result<FetchResponse, LoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Load the catalog with exactly one fetch attempt.
pub async fn load<S>(source: &S) -> Result<Catalog, LoadError>
where
    S: CatalogSource + ?Sized,
{
    info!(source = %source.describe(), "loading catalog");

    let result = fetch_catalog(source).await;
    match &result {
        Ok(catalog) => info!(products = catalog.len(), "catalog loaded"),
        Err(e) => warn!(error = %e, "catalog load failed"),
    }
    result
}

async fn fetch_catalog<S>(source: &S) -> Result<Catalog, LoadError>
where
    S: CatalogSource + ?Sized,
{
    let response = source.fetch().await?;
    if !response.status.is_success() {
        return Err(LoadError::Status(response.status));
    }
    Catalog::from_json(&response.body)
}

/// Load state of the page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// The single catalog request is outstanding.
    Loading,
    /// The catalog is available.
    Loaded(Catalog),
    /// The load failed; terminal.
    Failed(LoadError),
}

impl LoadState {
    /// `Idle -> Loading`. Any other state is returned unchanged.
    pub fn start(self) -> Self {
        match self {
            LoadState::Idle => LoadState::Loading,
            other => {
                warn!(state = other.name(), "ignoring load start outside idle state");
                other
            }
        }
    }

    /// `Loading -> Loaded | Failed`. Any other state is returned unchanged,
    /// so the loading state is left at most once.
    pub fn finish(self, result: Result<Catalog, LoadError>) -> Self {
        match self {
            LoadState::Loading => match result {
                Ok(catalog) => LoadState::Loaded(catalog),
                Err(e) => LoadState::Failed(e),
            },
            other => {
                warn!(state = other.name(), "ignoring load completion outside loading state");
                other
            }
        }
    }

    /// Check if the page is still waiting for the catalog.
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Idle | LoadState::Loading)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}
