//! Raw response types for the provider's JSON envelopes.
//!
//! Every field is optional with a default: the provider routinely omits
//! nested objects, and a missing field must degrade to a default rather
//! than fail the whole resolution.

use serde::{Deserialize, Deserializer, Serialize};

/// One hadith entry as returned by the provider, before normalization.
///
/// The provider has shipped both a flat shape (`bookName`, `chapterName`,
/// `narratedBy`) and a nested one (`book.bookName`, `chapter.chapterEnglish`);
/// this struct carries both so either decodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawHadith {
    /// Entry number; the provider serializes this as a string or an integer.
    #[serde(deserialize_with = "string_or_number")]
    pub hadith_number: Option<String>,

    pub hadith_english: Option<String>,
    pub hadith_arabic: Option<String>,
    pub hadith_urdu: Option<String>,

    pub english_narrator: Option<String>,
    pub urdu_narrator: Option<String>,
    pub narrated_by: Option<String>,

    /// Authenticity grading string, e.g. "Sahih" or "Da'if".
    pub status: Option<String>,

    pub book_name: Option<String>,
    pub chapter_name: Option<String>,

    pub book: Option<RawBook>,
    pub chapter: Option<RawChapter>,
}

/// Nested book descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawBook {
    pub book_name: Option<String>,
    pub writer_name: Option<String>,
}

/// Nested chapter descriptor with per-language titles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawChapter {
    pub chapter_english: Option<String>,
    pub chapter_urdu: Option<String>,
    pub chapter_arabic: Option<String>,
}

/// Parsed result of a fetch-by-citation call.
#[derive(Debug, Clone, Default)]
pub struct CitationResponse {
    /// Matching entries; may legitimately be empty.
    pub hadiths: Vec<RawHadith>,
}

/// Parsed result of one page of a paginated fetch.
#[derive(Debug, Clone, Default)]
pub struct PageResponse {
    /// Entries on this page, in provider order.
    pub hadiths: Vec<RawHadith>,

    /// Whether the provider reports a further page.
    pub has_next_page: bool,
}

/// Top-level response envelope.
///
/// The `hadiths` key holds either a bare entry list (citation fetches) or a
/// pagination object with `data` and `next_page_url` (page fetches); both
/// shapes have been observed from the provider and both are accepted for
/// either call.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    hadiths: Option<HadithPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HadithPayload {
    List(Vec<RawHadith>),
    Page(RawPage),
}

#[derive(Debug, Deserialize)]
struct RawPage {
    #[serde(default)]
    data: Vec<RawHadith>,
    #[serde(default)]
    next_page_url: Option<String>,
}

impl Envelope {
    /// Flatten the envelope into entries plus a next-page flag.
    pub(crate) fn into_parts(self) -> (Vec<RawHadith>, bool) {
        match self.hadiths {
            None => (Vec::new(), false),
            Some(HadithPayload::List(entries)) => (entries, false),
            Some(HadithPayload::Page(page)) => {
                let has_next = page.next_page_url.is_some();
                (page.data, has_next)
            }
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Text(String),
        Int(u64),
    }

    Ok(Option::<Number>::deserialize(deserializer)?.map(|n| match n {
        Number::Text(s) => s,
        Number::Int(i) => i.to_string(),
    }))
}
