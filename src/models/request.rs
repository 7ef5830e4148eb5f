//! Request types consumed by the resolvers.

use serde::{Deserialize, Serialize};

use super::{Collection, Language};

/// A lookup of one specific entry in a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitationRequest {
    /// Collection to fetch from.
    pub collection: Collection,

    /// Entry number within the collection (1-based).
    pub entry_number: u32,

    /// Preferred language for the text.
    pub language: Language,
}

impl CitationRequest {
    /// Create a new citation request.
    pub fn new(collection: Collection, entry_number: u32, language: Language) -> Self {
        Self {
            collection,
            entry_number,
            language,
        }
    }

    /// Whether the entry number falls inside the collection's known range.
    pub fn is_in_range(&self) -> bool {
        self.entry_number >= 1 && self.entry_number <= self.collection.max_number()
    }
}

/// A substring search scoped to one collection and language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Collection to search within.
    pub collection: Collection,

    /// Query to match as a case-insensitive substring.
    pub query: String,

    /// Language field to match against and resolve in.
    pub language: Language,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(collection: Collection, query: impl Into<String>, language: Language) -> Self {
        Self {
            collection,
            query: query.into(),
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_range() {
        let ok = CitationRequest::new(Collection::AlTirmidhi, 3956, Language::English);
        assert!(ok.is_in_range());

        let zero = CitationRequest::new(Collection::AlTirmidhi, 0, Language::English);
        assert!(!zero.is_in_range());

        let over = CitationRequest::new(Collection::AlTirmidhi, 3957, Language::English);
        assert!(!over.is_in_range());
    }
}
