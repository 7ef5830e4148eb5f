//! Mock source for testing purposes.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use crate::models::Collection;
use crate::source::{CitationResponse, HadithSource, PageResponse, RawBook, RawHadith, SourceError};

/// A mock source that replays scripted responses.
///
/// Page outcomes are consumed front-to-back; once the queue is empty the
/// repeat page (if set) is served indefinitely, otherwise an empty final page.
/// Errors are scripted as messages and surface as [`SourceError::Network`].
#[derive(Debug, Default)]
pub struct MockSource {
    citation: Mutex<Option<Result<CitationResponse, String>>>,
    pages: Mutex<VecDeque<Result<PageResponse, String>>>,
    repeat: Mutex<Option<PageResponse>>,
    citation_calls: AtomicU32,
    page_calls: AtomicU32,
}

impl MockSource {
    /// Create a new mock source with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the citation response to return.
    pub fn set_citation(&self, response: CitationResponse) {
        *self.citation.lock().unwrap() = Some(Ok(response));
    }

    /// Make the next citation fetch fail.
    pub fn set_citation_error(&self, message: &str) {
        *self.citation.lock().unwrap() = Some(Err(message.to_string()));
    }

    /// Queue one page response.
    pub fn push_page(&self, page: PageResponse) {
        self.pages.lock().unwrap().push_back(Ok(page));
    }

    /// Queue one page error.
    pub fn push_page_error(&self, message: &str) {
        self.pages.lock().unwrap().push_back(Err(message.to_string()));
    }

    /// Serve this page whenever the queue runs dry.
    pub fn repeat_page(&self, page: PageResponse) {
        *self.repeat.lock().unwrap() = Some(page);
    }

    /// Number of citation fetches issued against this mock.
    pub fn citation_calls(&self) -> u32 {
        self.citation_calls.load(Ordering::SeqCst)
    }

    /// Number of page fetches issued against this mock.
    pub fn page_calls(&self) -> u32 {
        self.page_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HadithSource for MockSource {
    fn id(&self) -> &str {
        "mock"
    }

    fn name(&self) -> &str {
        "Mock Source"
    }

    async fn fetch_by_citation(
        &self,
        _collection: Collection,
        _number: u32,
    ) -> Result<CitationResponse, SourceError> {
        self.citation_calls.fetch_add(1, Ordering::SeqCst);

        match &*self.citation.lock().unwrap() {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(SourceError::Network(message.clone())),
            None => Ok(CitationResponse::default()),
        }
    }

    async fn fetch_page(
        &self,
        _collection: Collection,
        _query: Option<&str>,
        _page: u32,
    ) -> Result<PageResponse, SourceError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(outcome) = self.pages.lock().unwrap().pop_front() {
            return outcome.map_err(SourceError::Network);
        }

        match &*self.repeat.lock().unwrap() {
            Some(page) => Ok(page.clone()),
            None => Ok(PageResponse::default()),
        }
    }
}

/// Helper to build a raw hadith entry for testing.
pub fn make_hadith(number: u32, english: &str) -> RawHadith {
    RawHadith {
        hadith_number: Some(number.to_string()),
        hadith_english: Some(english.to_string()),
        status: Some("Sahih".to_string()),
        book: Some(RawBook {
            book_name: Some("Sahih al-Bukhari".to_string()),
            writer_name: Some("Imam Bukhari".to_string()),
        }),
        ..Default::default()
    }
}
