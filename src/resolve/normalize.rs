//! Shared normalization of raw provider records.
//!
//! Both resolvers funnel through [`normalize_record`] so that prefix
//! stripping, narrator merging, and authenticity mapping cannot drift apart
//! between the lookup and search paths.

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{Authenticity, HadithRecord, Language, Provenance};
use crate::source::RawHadith;

/// Boilerplate the provider sometimes prepends to the text body,
/// e.g. "Hadith #12 from Sahih al-Bukhari.".
fn citation_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| {
        Regex::new(r"(?i)^hadith #\d+ from [\w\s-]+\.\s*").expect("valid prefix pattern")
    })
}

/// Pick the text field for the requested language, falling back to English.
///
/// Returns `None` only when every usable field is empty.
pub(crate) fn localized_text(raw: &RawHadith, language: Language) -> Option<&str> {
    let preferred = match language {
        Language::English => raw.hadith_english.as_deref(),
        Language::Arabic => raw.hadith_arabic.as_deref(),
        Language::Urdu => raw.hadith_urdu.as_deref(),
    };

    preferred
        .filter(|text| !text.trim().is_empty())
        .or_else(|| {
            raw.hadith_english
                .as_deref()
                .filter(|text| !text.trim().is_empty())
        })
}

/// Strip a leading "Hadith #N from <collection>." marker if present.
pub(crate) fn strip_citation_prefix(text: &str) -> &str {
    match citation_prefix().find(text) {
        Some(found) if found.start() == 0 => &text[found.end()..],
        _ => text,
    }
}

/// Prepend the narrator unless the text already contains it.
pub(crate) fn merge_narrator(text: &str, narrator: Option<&str>) -> String {
    match narrator.map(str::trim).filter(|n| !n.is_empty()) {
        Some(narrator) if !text.contains(narrator) => format!("{} {}", narrator, text),
        _ => text.to_string(),
    }
}

/// Map the provider's grading string: "sahih" in any casing is authentic,
/// anything else (including empty or missing) is weak.
pub(crate) fn map_authenticity(status: Option<&str>) -> Authenticity {
    match status {
        Some(status) if status.trim().eq_ignore_ascii_case("sahih") => Authenticity::Authentic,
        _ => Authenticity::Weak,
    }
}

fn narrator_for(raw: &RawHadith, language: Language) -> Option<&str> {
    match language {
        Language::English => raw.english_narrator.as_deref(),
        Language::Urdu => raw.urdu_narrator.as_deref(),
        Language::Arabic => None,
    }
}

/// Reported collection name; the remote name wins over any client-side table.
fn book_name(raw: &RawHadith) -> &str {
    raw.book
        .as_ref()
        .and_then(|book| book.book_name.as_deref())
        .or(raw.book_name.as_deref())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("Unknown Book")
}

fn translator(raw: &RawHadith) -> &str {
    raw.book
        .as_ref()
        .and_then(|book| book.writer_name.as_deref())
        .or(raw.narrated_by.as_deref())
        .filter(|name| !name.trim().is_empty())
        .unwrap_or("Unknown")
}

fn title(raw: &RawHadith, language: Language) -> String {
    let chapter = raw.chapter.as_ref();
    let preferred = chapter.and_then(|c| match language {
        Language::English => c.chapter_english.as_deref(),
        Language::Urdu => c.chapter_urdu.as_deref(),
        Language::Arabic => c.chapter_arabic.as_deref(),
    });

    preferred
        .or_else(|| chapter.and_then(|c| c.chapter_english.as_deref()))
        .or_else(|| chapter.and_then(|c| c.chapter_urdu.as_deref()))
        .or_else(|| chapter.and_then(|c| c.chapter_arabic.as_deref()))
        .or(raw.chapter_name.as_deref())
        .or(raw.book_name.as_deref())
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(language.generic_title())
        .to_string()
}

/// Normalize one raw provider record into a [`HadithRecord`].
///
/// Returns `None` when the record carries no usable text in any language, in
/// which case the caller falls back to synthesized content. `fallback_number`
/// supplies the entry number when the record omits its own (lookup knows the
/// number it asked for; search has nothing better than "?").
pub fn normalize_record(
    raw: &RawHadith,
    language: Language,
    fallback_number: Option<u32>,
) -> Option<HadithRecord> {
    let text = localized_text(raw, language)?;
    let text = strip_citation_prefix(text.trim());
    let text = merge_narrator(text, narrator_for(raw, language));
    if text.is_empty() {
        return None;
    }

    let number = raw
        .hadith_number
        .clone()
        .or_else(|| fallback_number.map(|n| n.to_string()))
        .unwrap_or_else(|| "?".to_string());

    let mut builder = HadithRecord::builder(
        text,
        format!("{} {}", book_name(raw), number),
        language,
    )
    .translator(translator(raw))
    .authenticity(map_authenticity(raw.status.as_deref()))
    .title(title(raw, language))
    .provenance(Provenance::Remote);

    if let Some(narrator) = raw.english_narrator.as_deref().filter(|n| !n.trim().is_empty()) {
        builder = builder.narrator_english(narrator);
    }
    if let Some(narrator) = raw.urdu_narrator.as_deref().filter(|n| !n.trim().is_empty()) {
        builder = builder.narrator_urdu(narrator);
    }

    Some(builder.build())
}
