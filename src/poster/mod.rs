//! Terminal poster rendering: the presentation-side consumer of
//! [`HadithRecord`].
//!
//! The renderer is a pure function of the record, the saved preferences, and
//! the target width, which keeps it testable as plain string assembly. Image
//! export and the platform share sheet live outside this crate; the closest
//! analogs here are the bordered card and [`share_text`].

mod prefs;

pub use prefs::{parse_hex_color, PosterPrefs};

use owo_colors::OwoColorize;

use crate::models::{HadithRecord, Provenance};
use crate::utils::{truncate_with_ellipsis, wrap_text};
use unicode_width::UnicodeWidthStr;

const MIN_CARD_WIDTH: usize = 40;
const MAX_CARD_WIDTH: usize = 80;

/// Render a record as a bordered card.
///
/// `width` is the available terminal width; the card clamps itself to a
/// readable range inside it. With `color` set, the border tracks the
/// authenticity grading (the poster's border-color cue) and the body text
/// uses the configured text color.
pub fn render_poster(
    record: &HadithRecord,
    prefs: &PosterPrefs,
    width: usize,
    color: bool,
) -> String {
    let card_width = width.clamp(MIN_CARD_WIDTH, MAX_CARD_WIDTH);
    let inner = card_width - 4;

    let bar = paint_border("│", record, color);
    let mut out = String::new();

    out.push_str(&paint_border(
        &format!("┌{}┐", "─".repeat(card_width - 2)),
        record,
        color,
    ));
    out.push('\n');

    let mut body_lines: Vec<String> = Vec::new();
    body_lines.push(center(&truncate_with_ellipsis(&record.title, inner), inner));
    body_lines.push(String::new());

    let airy = prefs.line_spacing >= 1.8;
    let text = display_text(record, prefs);
    for (i, line) in wrap_text(&text, inner).into_iter().enumerate() {
        if airy && i > 0 {
            body_lines.push(String::new());
        }
        body_lines.push(line);
    }

    body_lines.push(String::new());
    body_lines.push(format!("— {}", record.source_label));
    body_lines.push(format!("Translated by {}", record.translator));
    body_lines.push(format!("[{}]", record.authenticity.label()));
    if record.provenance == Provenance::Synthesized {
        body_lines.push("(locally generated placeholder)".to_string());
    }
    body_lines.push(String::new());
    body_lines.push(right_align("Nasihun.com", inner));

    for line in body_lines {
        let padding = " ".repeat(inner.saturating_sub(line.width()));
        out.push_str(&format!("{} {}{} {}\n", bar, paint_text(&line, prefs, color), padding, bar));
    }

    out.push_str(&paint_border(
        &format!("└{}┘", "─".repeat(card_width - 2)),
        record,
        color,
    ));
    out.push('\n');
    out
}

/// The title/text/source block handed to whatever sharing channel the caller
/// has available.
pub fn share_text(record: &HadithRecord) -> String {
    format!(
        "Hadith from Nasihun.com\n\n{}\n\nSource: {}",
        record.text, record.source_label
    )
}

fn display_text(record: &HadithRecord, prefs: &PosterPrefs) -> String {
    if prefs.show_narrator {
        return record.text.clone();
    }

    let narrators = [
        record.narrator_english.as_deref(),
        record.narrator_urdu.as_deref(),
    ];
    for narrator in narrators.into_iter().flatten() {
        if let Some(rest) = record.text.strip_prefix(narrator) {
            return rest.trim_start().to_string();
        }
    }
    record.text.clone()
}

fn center(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat((width - w) / 2), text)
}

fn right_align(text: &str, width: usize) -> String {
    let w = text.width();
    if w >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(width - w), text)
}

fn paint_border(text: &str, record: &HadithRecord, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    if record.authenticity.is_authentic() {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

fn paint_text(text: &str, prefs: &PosterPrefs, color: bool) -> String {
    if !color || text.is_empty() {
        return text.to_string();
    }
    match parse_hex_color(&prefs.text_color) {
        Some((r, g, b)) => text.truecolor(r, g, b).to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Authenticity, Language};

    fn record() -> HadithRecord {
        HadithRecord::builder(
            "Narrated Abu Hurairah: The Prophet said a memorable thing.",
            "Sahih al-Bukhari 99",
            Language::English,
        )
        .translator("Dr. Muhsin Khan")
        .authenticity(Authenticity::Authentic)
        .title("Book of Knowledge")
        .narrator_english("Narrated Abu Hurairah:")
        .build()
    }

    #[test]
    fn test_card_carries_record_fields() {
        let card = render_poster(&record(), &PosterPrefs::default(), 80, false);

        assert!(card.contains("Book of Knowledge"));
        assert!(card.contains("— Sahih al-Bukhari 99"));
        assert!(card.contains("Translated by Dr. Muhsin Khan"));
        assert!(card.contains("[Sahih]"));
        assert!(card.contains("Nasihun.com"));
        assert!(!card.contains("placeholder"));
    }

    #[test]
    fn test_narrator_hidden_when_disabled() {
        let prefs = PosterPrefs {
            show_narrator: false,
            ..Default::default()
        };
        let card = render_poster(&record(), &prefs, 80, false);

        assert!(!card.contains("Narrated Abu Hurairah:"));
        assert!(card.contains("The Prophet said a memorable thing."));
    }

    #[test]
    fn test_synthesized_caption() {
        let mut r = record();
        r.provenance = Provenance::Synthesized;
        let card = render_poster(&r, &PosterPrefs::default(), 80, false);
        assert!(card.contains("(locally generated placeholder)"));
    }

    #[test]
    fn test_share_text_block() {
        let share = share_text(&record());
        assert!(share.starts_with("Hadith from Nasihun.com\n\n"));
        assert!(share.ends_with("Source: Sahih al-Bukhari 99"));
    }

    #[test]
    fn test_uncolored_card_lines_align() {
        let card = render_poster(&record(), &PosterPrefs::default(), 60, false);
        let widths: Vec<usize> = card.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
