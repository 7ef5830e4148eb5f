//! Paged substring search with bounded fan-out and graceful fallback.

use std::sync::Arc;

use crate::models::{HadithRecord, SearchRequest};
use crate::resolve::normalize::{localized_text, normalize_record};
use crate::source::{HadithSource, RawHadith};
use crate::synth;

/// Bounds on one search resolution.
///
/// The double bound (pages and accumulated matches) keeps the fan-out against
/// an unreliable provider finite even when it reports further pages forever.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Maximum number of page requests per resolution.
    pub max_pages: u32,

    /// Maximum number of accumulated matches per resolution.
    pub max_results: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_pages: 5,
            max_results: 20,
        }
    }
}

/// Resolves one [`SearchRequest`] to an ordered list of [`HadithRecord`]s.
///
/// Pages are fetched strictly sequentially because the stopping condition
/// depends on the cumulative match count. Matching is a case-insensitive
/// substring test against the language-appropriate field, applied client-side.
#[derive(Debug, Clone)]
pub struct SearchResolver {
    source: Arc<dyn HadithSource>,
    limits: SearchLimits,
}

impl SearchResolver {
    /// Create a resolver with default limits.
    pub fn new(source: Arc<dyn HadithSource>) -> Self {
        Self::with_limits(source, SearchLimits::default())
    }

    /// Create a resolver with explicit limits.
    pub fn with_limits(source: Arc<dyn HadithSource>, limits: SearchLimits) -> Self {
        Self { source, limits }
    }

    /// Resolve a search to an ordered result list.
    ///
    /// The list is empty only for a blank query; an unreachable provider or a
    /// matchless search yields deterministic synthesized results instead
    /// (which are themselves empty for queries shorter than three characters).
    pub async fn resolve(&self, request: &SearchRequest) -> Vec<HadithRecord> {
        let query = request.query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let mut matched: Vec<RawHadith> = Vec::new();
        let mut page = 1u32;

        loop {
            match self.source.fetch_page(request.collection, None, page).await {
                Ok(response) => {
                    for raw in response.hadiths {
                        if matched.len() >= self.limits.max_results {
                            break;
                        }
                        let is_match = localized_text(&raw, request.language)
                            .map(|text| text.to_lowercase().contains(&needle))
                            .unwrap_or(false);
                        if is_match {
                            matched.push(raw);
                        }
                    }

                    if !response.has_next_page
                        || matched.len() >= self.limits.max_results
                        || page >= self.limits.max_pages
                    {
                        break;
                    }
                    page += 1;
                }
                Err(err) => {
                    // Partial results survive a mid-paging failure; only a
                    // fruitless search falls through to the synthesizer.
                    tracing::warn!(
                        collection = request.collection.slug(),
                        page,
                        error = %err,
                        "page fetch failed, stopping pagination"
                    );
                    break;
                }
            }
        }

        if matched.is_empty() {
            tracing::debug!(
                collection = request.collection.slug(),
                query,
                "no provider matches, synthesizing search results"
            );
            return synth::synthesize_search(request.collection, query, request.language);
        }

        matched
            .iter()
            .filter_map(|raw| normalize_record(raw, request.language, None))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collection, Language, Provenance};
    use crate::source::mock::{make_hadith, MockSource};
    use crate::source::PageResponse;

    fn page(hadiths: Vec<RawHadith>, has_next_page: bool) -> PageResponse {
        PageResponse {
            hadiths,
            has_next_page,
        }
    }

    #[tokio::test]
    async fn test_blank_query_returns_empty_without_paging() {
        let source = Arc::new(MockSource::new());
        let resolver = SearchResolver::new(source.clone());

        let request = SearchRequest::new(Collection::SahihBukhari, "   ", Language::English);
        let records = resolver.resolve(&request).await;

        assert!(records.is_empty());
        assert_eq!(source.page_calls(), 0);
    }

    #[tokio::test]
    async fn test_filters_case_insensitively_across_pages() {
        let source = Arc::new(MockSource::new());
        source.push_page(page(
            vec![
                make_hadith(1, "Actions are judged by INTENTIONS."),
                make_hadith(2, "Religion is sincerity."),
            ],
            true,
        ));
        source.push_page(page(vec![make_hadith(3, "Each man will have what he intended.")], false));

        let request = SearchRequest::new(Collection::SahihBukhari, "intent", Language::English);
        let records = SearchResolver::new(source.clone()).resolve(&request).await;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source_label, "Sahih al-Bukhari 1");
        assert_eq!(records[1].source_label, "Sahih al-Bukhari 3");
        assert!(records.iter().all(|r| r.provenance == Provenance::Remote));
        assert_eq!(source.page_calls(), 2);
    }

    #[tokio::test]
    async fn test_page_bound_holds() {
        let source = Arc::new(MockSource::new());
        // Provider claims more pages forever; nothing ever matches.
        source.repeat_page(page(vec![make_hadith(1, "Unrelated text.")], true));

        let request = SearchRequest::new(Collection::SahihBukhari, "charity", Language::English);
        let records = SearchResolver::new(source.clone()).resolve(&request).await;

        assert_eq!(source.page_calls(), 5);
        // Fallback kicks in for the matchless search.
        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.provenance == Provenance::Synthesized));
    }

    #[tokio::test]
    async fn test_result_cap_stops_paging() {
        let source = Arc::new(MockSource::new());
        let matching: Vec<RawHadith> = (1..=30)
            .map(|n| make_hadith(n, "Prayer in congregation is virtuous."))
            .collect();
        source.repeat_page(page(matching, true));

        let request = SearchRequest::new(Collection::SahihBukhari, "prayer", Language::English);
        let records = SearchResolver::new(source.clone()).resolve(&request).await;

        assert_eq!(records.len(), 20);
        assert_eq!(source.page_calls(), 1);
    }

    #[tokio::test]
    async fn test_partial_results_survive_error() {
        let source = Arc::new(MockSource::new());
        source.push_page(page(
            vec![
                make_hadith(1, "Faith has many branches."),
                make_hadith(2, "Modesty is part of faith."),
                make_hadith(3, "Faith is sincerity."),
            ],
            true,
        ));
        source.push_page_error("gateway timeout");

        let request = SearchRequest::new(Collection::SahihBukhari, "faith", Language::English);
        let records = SearchResolver::new(source).resolve(&request).await;

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.provenance == Provenance::Remote));
    }

    #[tokio::test]
    async fn test_error_before_any_result_synthesizes() {
        let source = Arc::new(MockSource::new());
        source.push_page_error("connection reset");

        let request = SearchRequest::new(Collection::AlTirmidhi, "charity", Language::English);
        let records = SearchResolver::new(source).resolve(&request).await;

        assert!(!records.is_empty());
        assert!(records.iter().all(|r| r.provenance == Provenance::Synthesized));
        assert!(records.iter().all(|r| r.text.contains("charity")));
    }
}
