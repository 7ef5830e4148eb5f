//! Hadith collection and language identifiers.

use serde::{Deserialize, Serialize};

/// One of the canonical hadith collections served by the remote provider.
///
/// Each collection has a fixed API slug, a human-readable display name, and a
/// known maximum entry number. The mapping is static configuration, not
/// something derived at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    SahihBukhari,
    SahihMuslim,
    AlTirmidhi,
    AbuDawood,
    IbnEMajah,
    SunanNasai,
    Mishkat,
}

impl Collection {
    /// All collections, in the order the provider lists them.
    pub const ALL: [Collection; 7] = [
        Collection::SahihBukhari,
        Collection::SahihMuslim,
        Collection::AlTirmidhi,
        Collection::AbuDawood,
        Collection::IbnEMajah,
        Collection::SunanNasai,
        Collection::Mishkat,
    ];

    /// The identifier used in provider request URLs.
    pub fn slug(&self) -> &'static str {
        match self {
            Collection::SahihBukhari => "sahih-bukhari",
            Collection::SahihMuslim => "sahih-muslim",
            Collection::AlTirmidhi => "al-tirmidhi",
            Collection::AbuDawood => "abu-dawood",
            Collection::IbnEMajah => "ibn-e-majah",
            Collection::SunanNasai => "sunan-nasai",
            Collection::Mishkat => "mishkat",
        }
    }

    /// Human-readable display name.
    pub fn name(&self) -> &'static str {
        match self {
            Collection::SahihBukhari => "Sahih al-Bukhari",
            Collection::SahihMuslim => "Sahih Muslim",
            Collection::AlTirmidhi => "Jami at-Tirmidhi",
            Collection::AbuDawood => "Sunan Abu Dawood",
            Collection::IbnEMajah => "Sunan Ibn Majah",
            Collection::SunanNasai => "Sunan an-Nasa'i",
            Collection::Mishkat => "Mishkat Al-Masabih",
        }
    }

    /// Highest entry number the collection contains.
    ///
    /// Used for input validation and for bounding synthesized entry numbers.
    pub fn max_number(&self) -> u32 {
        match self {
            Collection::SahihBukhari => 7563,
            Collection::SahihMuslim => 7563,
            Collection::AlTirmidhi => 3956,
            Collection::AbuDawood => 5274,
            Collection::IbnEMajah => 4341,
            Collection::SunanNasai => 5761,
            Collection::Mishkat => 6294,
        }
    }

    /// Parse a collection from its API slug.
    pub fn from_slug(slug: &str) -> Option<Collection> {
        Collection::ALL.iter().copied().find(|c| c.slug() == slug)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::from_slug(s).ok_or_else(|| format!("unknown collection: {}", s))
    }
}

/// Language of a hadith text, mapping to the per-language fields of the
/// provider's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Arabic,
    Urdu,
}

impl Language {
    /// The lowercase identifier used in requests and output.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Arabic => "arabic",
            Language::Urdu => "urdu",
        }
    }

    /// Generic chapter label used when a record supplies no title.
    pub fn generic_title(&self) -> &'static str {
        match self {
            Language::English => "Unknown Chapter",
            Language::Arabic => "باب غير معروف",
            Language::Urdu => "نامعلوم باب",
        }
    }

    /// Whether the script reads right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic | Language::Urdu)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "english" => Ok(Language::English),
            "arabic" => Ok(Language::Arabic),
            "urdu" => Ok(Language::Urdu),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for collection in Collection::ALL {
            assert_eq!(Collection::from_slug(collection.slug()), Some(collection));
        }
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&Collection::IbnEMajah).unwrap();
        assert_eq!(json, "\"ibn-e-majah\"");

        let parsed: Collection = serde_json::from_str("\"sahih-bukhari\"").unwrap();
        assert_eq!(parsed, Collection::SahihBukhari);
    }

    #[test]
    fn test_max_numbers() {
        assert_eq!(Collection::SahihBukhari.max_number(), 7563);
        assert_eq!(Collection::Mishkat.max_number(), 6294);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("urdu".parse::<Language>(), Ok(Language::Urdu));
        assert!("klingon".parse::<Language>().is_err());
    }
}
