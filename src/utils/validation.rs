//! Input validation utilities
//!
//! Provides input validation and normalization functions.

use unicode_general_category::{GeneralCategory, get_general_category};

/// True when every character is a letter (L*) or number (N*). Empty input passes.
///
/// Combining marks and symbols are rejected even where `char::is_alphanumeric`
/// would accept them as Other_Alphabetic.
pub fn is_alphanumeric(input: &str) -> bool {
    input.chars().all(|c| {
        matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::DecimalNumber
                | GeneralCategory::LetterNumber
                | GeneralCategory::OtherNumber
        )
    })
}

/// Length in characters, not bytes
pub fn char_len(input: &str) -> usize {
    input.chars().count()
}

/// Canonical form used to store and compare quiz answers
pub fn normalize_answer(input: &str) -> String {
    input.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(is_alphanumeric("Ünïcode9"));
        assert!(!is_alphanumeric("valid user"));
        assert!(!is_alphanumeric("pass-word"));
        assert!(!is_alphanumeric("emoji😀"));
    }

    #[test]
    fn test_combining_marks_are_not_alphanumeric() {
        // U+0947 DEVANAGARI VOWEL SIGN E (Mn)
        assert!(!is_alphanumeric("नेने1234"));
        // U+24B6 CIRCLED LATIN CAPITAL LETTER A (So)
        assert!(!is_alphanumeric("Ⓐbc"));
        assert!(is_alphanumeric("नन1234"));
        assert!(is_alphanumeric("½²"));
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("abc"), 3);
        assert_eq!(char_len("äöü"), 3);
    }

    #[test]
    fn test_normalize_answer() {
        assert_eq!(normalize_answer("  Random Access MEMORY\n"), "random access memory");
    }
}
