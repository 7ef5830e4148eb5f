//! Deterministic placeholder content, used whenever the provider yields
//! nothing usable.
//!
//! Both entry points are pure functions of their inputs: repeated identical
//! calls return byte-identical output. Search synthesis seeds everything from
//! the query's character codes, so a retried search shows the same entry
//! numbers and text without any persisted state.

mod curated;

use crate::models::{
    Authenticity, Collection, HadithRecord, HadithRecordBuilder, Language, Provenance,
};

/// Terms the search synthesizer recognizes as chapter topics.
const SEARCH_TERMS: &[&str] = &[
    "prayer",
    "salat",
    "salah",
    "faith",
    "iman",
    "charity",
    "zakat",
    "fasting",
    "sawm",
    "pilgrimage",
    "hajj",
    "prophet",
    "muhammad",
    "quran",
    "allah",
    "islam",
    "muslim",
    "believer",
    "paradise",
    "jannah",
    "hellfire",
    "jahannam",
    "good deeds",
    "sin",
    "repentance",
    "tawbah",
];

/// Minimum query length that produces synthesized search results.
const MIN_QUERY_CHARS: usize = 3;

/// Stable numeric seed for a query: the wrapping sum of its char codes.
pub fn query_seed(query: &str) -> u32 {
    query.chars().fold(0u32, |acc, c| acc.wrapping_add(c as u32))
}

/// Produce placeholder content for one citation.
///
/// Well-known entries come from a curated table, any other number in a known
/// collection gets that collection's default text, and everything else gets a
/// generic template naming the collection and number. Never fails.
pub fn synthesize_citation(
    collection: Collection,
    number: u32,
    language: Language,
) -> HadithRecord {
    let source_label = format!("{} {}", collection.name(), number);

    let entry = curated::curated(collection, number, language)
        .or_else(|| curated::collection_default(collection, language));

    match entry {
        Some(entry) => HadithRecord::builder(entry.text, source_label, language)
            .translator(entry.translator)
            .title(entry.title)
            .authenticity(Authenticity::Authentic)
            .provenance(Provenance::Synthesized)
            .build(),
        None => HadithRecord::builder(
            generic_placeholder(collection, number, language),
            source_label,
            language,
        )
        .authenticity(Authenticity::Weak)
        .provenance(Provenance::Synthesized)
        .build(),
    }
}

/// Placeholder for entries with no curated text; worded so it cannot be
/// mistaken for an authentic narration.
fn generic_placeholder(collection: Collection, number: u32, language: Language) -> String {
    match language {
        Language::English => format!(
            "No authoritative text is available for {} {}. This placeholder was generated locally; consult a printed edition for the narration itself.",
            collection.name(),
            number
        ),
        Language::Arabic => format!(
            "لا يتوفر نص موثوق للحديث رقم {} من {}. هذا نص بديل تم إنشاؤه محليًا؛ يرجى الرجوع إلى نسخة مطبوعة.",
            number,
            collection.name()
        ),
        Language::Urdu => format!(
            "{} کی حدیث نمبر {} کا مستند متن دستیاب نہیں ہے۔ یہ عبارت مقامی طور پر تیار کی گئی ہے؛ اصل روایت کے لیے مطبوعہ نسخہ دیکھیں۔",
            collection.name(),
            number
        ),
    }
}

/// Produce deterministic placeholder search results for a query.
///
/// Queries shorter than three characters yield an empty list. Otherwise the
/// seed fixes the result count (3 to 5), each entry number (modulo the
/// collection's maximum), and the grading split; the text always embeds the
/// literal query string.
pub fn synthesize_search(
    collection: Collection,
    query: &str,
    language: Language,
) -> Vec<HadithRecord> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_CHARS {
        return Vec::new();
    }

    let seed = query_seed(query);
    let lower = query.to_lowercase();

    let matched_terms: Vec<&str> = SEARCH_TERMS
        .iter()
        .copied()
        .filter(|term| term.contains(&lower) || lower.contains(term))
        .collect();
    let term = (!matched_terms.is_empty()).then(|| matched_terms[seed as usize % matched_terms.len()]);

    let count = 3 + (seed % 3);
    (0..count)
        .map(|i| synthesize_result(collection, language, query, term, seed, i))
        .collect()
}

fn synthesize_result(
    collection: Collection,
    language: Language,
    query: &str,
    term: Option<&str>,
    seed: u32,
    index: u32,
) -> HadithRecord {
    let number = seed.wrapping_mul(index + 1) % collection.max_number() + 1;
    let authenticity = if (seed.wrapping_add(index)) % 5 == 0 {
        Authenticity::Weak
    } else {
        Authenticity::Authentic
    };

    let builder = match language {
        Language::English => HadithRecord::builder(
            format!(
                "Narrated Abu Hurairah: The Prophet (\u{fdfa}) mentioned about {}: 'This is among the best of deeds that a believer can perform.'",
                query
            ),
            format!("{} {}", collection.name(), number),
            language,
        )
        .narrator_english("Narrated Abu Hurairah:")
        .title(match term {
            Some(term) => format!("Book of {}", capitalize(term)),
            None => "Book of Good Deeds".to_string(),
        }),
        Language::Arabic => HadithRecord::builder(
            format!(
                "ذكر النبي صلى الله عليه وسلم عن {}: 'هذا من أفضل الأعمال التي يمكن للمؤمن أن يقوم بها.'",
                query
            ),
            format!("{} {}", collection.name(), number),
            language,
        )
        .title(match term {
            Some(term) => format!("كتاب {}", term),
            None => "كتاب الأعمال الصالحة".to_string(),
        }),
        Language::Urdu => HadithRecord::builder(
            format!(
                "ابو ہریرہ رضی اللہ عنہ سے روایت ہے: آپ صلی اللہ علیہ وسلم نے {} کے بارے میں فرمایا: 'یہ ان بہترین اعمال میں سے ہے جو ایک مومن انجام دے سکتا ہے۔'",
                query
            ),
            format!("{} {}", collection.name(), number),
            language,
        )
        .narrator_urdu("ابو ہریرہ رضی اللہ عنہ سے روایت ہے:")
        .title(match term {
            Some(term) => format!("کتاب {}", term),
            None => "کتاب نیک اعمال".to_string(),
        }),
    };

    finish_result(builder, authenticity)
}

fn finish_result(builder: HadithRecordBuilder, authenticity: Authenticity) -> HadithRecord {
    builder
        .translator("Unknown Scholar")
        .authenticity(authenticity)
        .provenance(Provenance::Synthesized)
        .build()
}

fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_bukhari_one() {
        let record = synthesize_citation(Collection::SahihBukhari, 1, Language::English);

        assert!(record.text.starts_with("The Messenger of Allah"));
        assert_eq!(record.authenticity, Authenticity::Authentic);
        assert_eq!(record.source_label, "Sahih al-Bukhari 1");
        assert_eq!(record.provenance, Provenance::Synthesized);
    }

    #[test]
    fn test_collection_default_for_unmapped_number() {
        let record = synthesize_citation(Collection::Mishkat, 4000, Language::English);

        assert!(record.text.contains("Allah does not look at your appearance"));
        assert_eq!(record.source_label, "Mishkat Al-Masabih 4000");
        assert_eq!(record.translator, "James Robson");
    }

    #[test]
    fn test_generic_placeholder_never_empty() {
        // No curated Urdu text exists for Mishkat; the generic template applies.
        let record = synthesize_citation(Collection::Mishkat, 123, Language::Urdu);

        assert!(!record.text.is_empty());
        assert!(record.text.contains("Mishkat Al-Masabih"));
        assert!(record.text.contains("123"));
        assert_eq!(record.authenticity, Authenticity::Weak);
    }

    #[test]
    fn test_search_short_query_is_empty() {
        assert!(synthesize_search(Collection::SahihBukhari, "ab", Language::English).is_empty());
        assert!(synthesize_search(Collection::SahihBukhari, "  a ", Language::English).is_empty());
    }

    #[test]
    fn test_search_is_deterministic() {
        let first = synthesize_search(Collection::SahihMuslim, "patience", Language::English);
        let second = synthesize_search(Collection::SahihMuslim, "patience", Language::English);

        assert!(!first.is_empty());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_search_embeds_query_and_bounds_numbers() {
        let records = synthesize_search(Collection::AlTirmidhi, "gratitude", Language::English);

        assert!((3..=5).contains(&records.len()));
        for record in &records {
            assert!(record.text.contains("gratitude"));
            let number: u32 = record
                .source_label
                .rsplit(' ')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            assert!((1..=Collection::AlTirmidhi.max_number()).contains(&number));
        }
    }

    #[test]
    fn test_search_term_shapes_title() {
        let records = synthesize_search(Collection::SahihBukhari, "prayer", Language::English);
        assert!(records.iter().all(|r| r.title.starts_with("Book of ")));
    }

    #[test]
    fn test_query_seed_sums_char_codes() {
        assert_eq!(query_seed("abc"), 97 + 98 + 99);
        assert_eq!(query_seed(""), 0);
    }
}
