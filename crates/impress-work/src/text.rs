//! Text canonicalization for work fields
//!
//! Two operations with pinned character classes:
//! - `clean`: trim and collapse Unicode whitespace (`White_Space`) to single spaces
//! - `strip_punctuation`: drop every char in Unicode general category `P`
//!
//! `clean` is applied to stored/display fields. `strip_punctuation` is only
//! used when deriving identity fingerprints.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref PUNCTUATION: Regex = Regex::new(r"\p{P}").unwrap();
}

/// Pure string canonicalization used by the normalizer.
///
/// Implementations must be total and side-effect free.
pub trait TextNormalizer {
    /// Trim and collapse whitespace, preserving case and punctuation
    fn clean(&self, s: &str) -> String;

    /// Remove punctuation characters, preserving everything else
    fn strip_punctuation(&self, s: &str) -> String;
}

/// Default normalizer backed by Unicode regex classes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeTextNormalizer;

impl TextNormalizer for UnicodeTextNormalizer {
    fn clean(&self, s: &str) -> String {
        WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
    }

    fn strip_punctuation(&self, s: &str) -> String {
        PUNCTUATION.replace_all(s, "").into_owned()
    }
}

/// Clean a field with the default normalizer
pub fn clean(s: &str) -> String {
    UnicodeTextNormalizer.clean(s)
}

/// Strip punctuation with the default normalizer
pub fn strip_punctuation(s: &str) -> String {
    UnicodeTextNormalizer.strip_punctuation(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_trims() {
        assert_eq!(clean("  Attention  "), "Attention");
        assert_eq!(clean("\t\nTitle\r\n"), "Title");
    }

    #[test]
    fn test_clean_collapses_internal_runs() {
        assert_eq!(clean("Machine   Learning"), "Machine Learning");
        assert_eq!(clean("Deep\t\n Learning"), "Deep Learning");
    }

    #[test]
    fn test_clean_unicode_whitespace() {
        // NBSP and ideographic space are White_Space
        assert_eq!(clean("Graph\u{00A0}\u{3000}Theory"), "Graph Theory");
        assert_eq!(clean("\u{2003}Title\u{2003}"), "Title");
    }

    #[test]
    fn test_clean_preserves_case_and_punctuation() {
        assert_eq!(clean("A. Vaswani,  et al."), "A. Vaswani, et al.");
    }

    #[test]
    fn test_clean_empty_and_blank() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \t "), "");
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_punctuation("Hello, World!"), "Hello World");
        assert_eq!(strip_punctuation("a. vaswani"), "a vaswani");
        assert_eq!(strip_punctuation("Self-Attention: (Revisited)"), "SelfAttention Revisited");
    }

    #[test]
    fn test_strip_punctuation_unicode() {
        assert_eq!(strip_punctuation("«Quoted»"), "Quoted");
        assert_eq!(strip_punctuation("wait…"), "wait");
        assert_eq!(strip_punctuation("¿Qué?"), "Qué");
    }

    #[test]
    fn test_strip_punctuation_keeps_symbols() {
        // Symbols (category S) are not punctuation
        assert_eq!(strip_punctuation("C++ $5 ^2"), "C++ $5 ^2");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let once = clean("  a  b\t c ");
        assert_eq!(clean(&once), once);
    }
}
