//! Resolved hadith record, the output of every resolution path.

use serde::{Deserialize, Serialize};

use super::Language;

/// Authenticity grading of a hadith, as reported by the provider or defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Authenticity {
    Authentic,
    Weak,
}

impl Authenticity {
    /// Display label in the grading vocabulary of the source material.
    pub fn label(&self) -> &'static str {
        match self {
            Authenticity::Authentic => "Sahih",
            Authenticity::Weak => "Zaeef",
        }
    }

    pub fn is_authentic(&self) -> bool {
        matches!(self, Authenticity::Authentic)
    }
}

impl std::fmt::Display for Authenticity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a record's text came from.
///
/// The presentation layer uses this to caption placeholder content; the two
/// variants are otherwise interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Returned by the remote provider.
    Remote,
    /// Generated locally because no authoritative text was available.
    Synthesized,
}

/// A fully resolved hadith ready for rendering.
///
/// Invariants: `text` is never empty, and `source_label` always combines a
/// human-readable collection name with the entry number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HadithRecord {
    /// The hadith text in the requested language (English fallback).
    pub text: String,

    /// Collection display name plus entry number, e.g. "Sahih al-Bukhari 5027".
    pub source_label: String,

    /// Translator or writer credited for the text.
    pub translator: String,

    /// Authenticity grading.
    pub authenticity: Authenticity,

    /// Language the text was resolved in.
    pub language: Language,

    /// Chapter or book title.
    pub title: String,

    /// English narrator chain, when the record carries one.
    pub narrator_english: Option<String>,

    /// Urdu narrator chain, when the record carries one.
    pub narrator_urdu: Option<String>,

    /// Whether the text came from the provider or the local synthesizer.
    pub provenance: Provenance,
}

impl HadithRecord {
    /// Start building a record from the required fields.
    pub fn builder(
        text: impl Into<String>,
        source_label: impl Into<String>,
        language: Language,
    ) -> HadithRecordBuilder {
        HadithRecordBuilder::new(text, source_label, language)
    }
}

/// Builder for [`HadithRecord`].
#[derive(Debug, Clone)]
pub struct HadithRecordBuilder {
    record: HadithRecord,
}

impl HadithRecordBuilder {
    /// Create a new builder with required fields.
    pub fn new(
        text: impl Into<String>,
        source_label: impl Into<String>,
        language: Language,
    ) -> Self {
        Self {
            record: HadithRecord {
                text: text.into(),
                source_label: source_label.into(),
                translator: "Unknown".to_string(),
                authenticity: Authenticity::Weak,
                language,
                title: language.generic_title().to_string(),
                narrator_english: None,
                narrator_urdu: None,
                provenance: Provenance::Remote,
            },
        }
    }

    pub fn translator(mut self, translator: impl Into<String>) -> Self {
        self.record.translator = translator.into();
        self
    }

    pub fn authenticity(mut self, authenticity: Authenticity) -> Self {
        self.record.authenticity = authenticity;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.record.title = title.into();
        self
    }

    pub fn narrator_english(mut self, narrator: impl Into<String>) -> Self {
        self.record.narrator_english = Some(narrator.into());
        self
    }

    pub fn narrator_urdu(mut self, narrator: impl Into<String>) -> Self {
        self.record.narrator_urdu = Some(narrator.into());
        self
    }

    pub fn provenance(mut self, provenance: Provenance) -> Self {
        self.record.provenance = provenance;
        self
    }

    /// Build the record.
    pub fn build(self) -> HadithRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = HadithRecord::builder(
            "Actions are judged by intentions.",
            "Sahih al-Bukhari 1",
            Language::English,
        )
        .translator("Dr. Muhsin Khan")
        .authenticity(Authenticity::Authentic)
        .title("Chapter: How the Divine Revelation started")
        .build();

        assert_eq!(record.source_label, "Sahih al-Bukhari 1");
        assert_eq!(record.translator, "Dr. Muhsin Khan");
        assert!(record.authenticity.is_authentic());
        assert_eq!(record.provenance, Provenance::Remote);
    }

    #[test]
    fn test_builder_defaults() {
        let record = HadithRecord::builder("text", "Sahih Muslim 55", Language::Urdu).build();

        assert_eq!(record.translator, "Unknown");
        assert_eq!(record.title, Language::Urdu.generic_title());
        assert_eq!(record.authenticity, Authenticity::Weak);
        assert!(record.narrator_english.is_none());
    }

    #[test]
    fn test_authenticity_serde() {
        assert_eq!(
            serde_json::to_string(&Authenticity::Authentic).unwrap(),
            "\"authentic\""
        );
        assert_eq!(serde_json::to_string(&Provenance::Synthesized).unwrap(), "\"synthesized\"");
    }
}
