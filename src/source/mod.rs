//! Remote hadith provider client behind a swappable trait.
//!
//! This module defines the [`HadithSource`] trait that the resolvers depend
//! on. The live implementation is [`HadithApiSource`], which talks to
//! HadithAPI.com; [`MockSource`] is a scriptable stand-in for tests.
//!
//! This layer does no retries and no text processing beyond parsing the
//! response envelope into a raw record list plus a next-page flag. Fallback
//! policy belongs to the resolvers.

mod hadith_api;
pub mod mock;
mod raw;

pub use hadith_api::HadithApiSource;
pub use mock::MockSource;
pub use raw::{CitationResponse, PageResponse, RawBook, RawChapter, RawHadith};

use crate::models::Collection;
use async_trait::async_trait;

/// Interface to a remote hadith content provider.
///
/// Both operations are network I/O and may fail outright or succeed with zero
/// matching records; callers must treat those two outcomes separately.
#[async_trait]
pub trait HadithSource: Send + Sync + std::fmt::Debug {
    /// Unique identifier for this source.
    fn id(&self) -> &str;

    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Fetch the entries matching one (collection, number) citation.
    async fn fetch_by_citation(
        &self,
        collection: Collection,
        number: u32,
    ) -> Result<CitationResponse, SourceError>;

    /// Fetch one page of a collection, optionally narrowed by a provider-side
    /// search query.
    async fn fetch_page(
        &self,
        collection: Collection,
        query: Option<&str>,
        page: u32,
    ) -> Result<PageResponse, SourceError>;
}

/// Errors that can occur when talking to a provider
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// Network or HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// Parsing error (malformed response body)
    #[error("Parse error: {0}")]
    Parse(String),

    /// API error from the provider (non-2xx status)
    #[error("API error: {0}")]
    Api(String),

    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(format!("JSON: {}", err))
    }
}
