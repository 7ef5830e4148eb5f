//! Terminal display utilities for CLI output formatting.
//!
//! Width calculations go through `unicode-width` so wrapped Arabic and Urdu
//! text lines up with the card borders.

use std::io::{self, IsTerminal};
use std::sync::OnceLock;
use terminal_size::terminal_size;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Default width when terminal size cannot be determined.
pub const DEFAULT_WIDTH: usize = 100;

static TERMINAL_WIDTH: OnceLock<usize> = OnceLock::new();

/// Get the current terminal width in characters, cached on first call.
pub fn terminal_width() -> usize {
    *TERMINAL_WIDTH
        .get_or_init(|| terminal_size().map(|(w, _)| w.0 as usize).unwrap_or(DEFAULT_WIDTH))
}

/// Check if stdout is a terminal.
pub fn is_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Truncate text to a maximum display width, appending an ellipsis.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Greedily wrap text into lines no wider than `max_width`.
///
/// Words wider than the limit are emitted on their own line rather than split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
            continue;
        }

        if current.width() + 1 + word.width() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_text() {
        let truncated = truncate_with_ellipsis("a very long piece of text", 10);
        assert!(truncated.width() <= 10);
        assert!(truncated.ends_with('…'));
    }

    #[test]
    fn test_wrap_basic() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
    }

    #[test]
    fn test_wrap_never_empty() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_oversized_word() {
        let lines = wrap_text("tiny extraordinarily-long-word end", 8);
        assert!(lines.contains(&"extraordinarily-long-word".to_string()));
    }
}
