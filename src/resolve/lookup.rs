//! Single-citation resolution with graceful fallback.

use std::sync::Arc;

use crate::models::{CitationRequest, HadithRecord};
use crate::resolve::normalize::normalize_record;
use crate::source::HadithSource;
use crate::synth;

/// Resolves one [`CitationRequest`] to a [`HadithRecord`].
///
/// Resolution never fails: a transport error, an empty response, or a record
/// with no usable text all degrade to the deterministic synthesizer. The two
/// terminal states differ only in [`Provenance`](crate::models::Provenance).
#[derive(Debug, Clone)]
pub struct LookupResolver {
    source: Arc<dyn HadithSource>,
}

impl LookupResolver {
    /// Create a resolver over the given source.
    pub fn new(source: Arc<dyn HadithSource>) -> Self {
        Self { source }
    }

    /// Resolve a citation to displayable content.
    pub async fn resolve(&self, request: &CitationRequest) -> HadithRecord {
        // Out-of-range numbers are rejected before any network call.
        if !request.is_in_range() {
            tracing::warn!(
                collection = request.collection.slug(),
                number = request.entry_number,
                "entry number out of range, synthesizing without fetching"
            );
            return self.fallback(request);
        }

        match self
            .source
            .fetch_by_citation(request.collection, request.entry_number)
            .await
        {
            Ok(response) => {
                let record = response
                    .hadiths
                    .first()
                    .and_then(|raw| {
                        normalize_record(raw, request.language, Some(request.entry_number))
                    });

                match record {
                    Some(record) => record,
                    None => {
                        tracing::debug!(
                            collection = request.collection.slug(),
                            number = request.entry_number,
                            "provider returned no usable entry, synthesizing"
                        );
                        self.fallback(request)
                    }
                }
            }
            Err(err) => {
                tracing::warn!(
                    collection = request.collection.slug(),
                    number = request.entry_number,
                    error = %err,
                    "citation fetch failed, synthesizing"
                );
                self.fallback(request)
            }
        }
    }

    fn fallback(&self, request: &CitationRequest) -> HadithRecord {
        synth::synthesize_citation(request.collection, request.entry_number, request.language)
    }
}
