//! Marker templates and marker tokens.
//!
//! A marker template such as `"%1.%2)"` embeds placeholders that refer to
//! the counters of level 0 and level 1. The marker *token* is the
//! comparable form of a marker used to recognize visually identical lists
//! that were authored under different numbering ids.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%([1-9])").expect("valid placeholder pattern"))
}

/// Check if a template references any level counter.
pub fn has_placeholders(template: &str) -> bool {
    placeholder_regex().is_match(template)
}

/// Normalize marker text to its comparable token.
///
/// Placeholders are reduced to their bare digits, the text is cut at the
/// first whitespace, and trailing punctuation is trimmed:
/// `"%1."` → `"1"`, `"%1.%2)"` → `"1.2"`, `"(a) "` → `"(a"`.
pub fn marker_token(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    let stripped = placeholder_regex().replace_all(&folded, "$1");
    let head = stripped
        .trim()
        .split_whitespace()
        .next()
        .unwrap_or_default();
    head.trim_end_matches(is_trailing_punctuation).to_string()
}

fn is_trailing_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || matches!(c, '。' | '、' | '．' | '）' | '」')
}

/// Substitute `%N` placeholders.
///
/// `counter_for` receives the zero-based level index the placeholder refers
/// to and returns its formatted value; `None` removes the placeholder.
pub fn expand_template<F>(template: &str, mut counter_for: F) -> String
where
    F: FnMut(u8) -> Option<String>,
{
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            let index = caps[1].parse::<u8>().unwrap_or(1).saturating_sub(1);
            counter_for(index).unwrap_or_default()
        })
        .into_owned()
}

/// Estimated rendered width of a marker.
pub fn estimate_marker_width(text: &str, font_size: f32, char_ratio: f32) -> f32 {
    text.chars().count() as f32 * font_size * char_ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_token() {
        assert_eq!(marker_token("%1."), "1");
        assert_eq!(marker_token("%1.%2."), "1.2");
        assert_eq!(marker_token("  3) Item text"), "3");
        assert_eq!(marker_token("(a)"), "(a");
        assert_eq!(marker_token("•"), "•");
        assert_eq!(marker_token(""), "");
        assert_eq!(marker_token("   "), "");
    }

    #[test]
    fn test_marker_token_folds_fullwidth() {
        assert_eq!(marker_token("１．"), "1");
    }

    #[test]
    fn test_expand_template() {
        let text = expand_template("%1.%2.", |level| match level {
            0 => Some("3".to_string()),
            1 => Some("b".to_string()),
            _ => None,
        });
        assert_eq!(text, "3.b.");

        let text = expand_template("Step %3:", |_| None);
        assert_eq!(text, "Step :");
        assert!(has_placeholders("%1)"));
        assert!(!has_placeholders("•"));
    }

    #[test]
    fn test_marker_width() {
        assert_eq!(estimate_marker_width("1.", 12.0, 0.5), 12.0);
        assert_eq!(estimate_marker_width("", 12.0, 0.5), 0.0);
    }
}
