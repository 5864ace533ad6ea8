//! Locale-aware text comparison.
//!
//! Approximates the root collation order: strings are compared by their base
//! letters first, then by accents and finally by case, lowercase letters
//! going before uppercase ones.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Compares the provided strings in a locale-aware manner.
///
/// Only returns [`Ordering::Equal`] for identical strings.
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accents(a).cmp(accents(b)))
        .then_with(|| case(a).cmp(case(b)))
        .then_with(|| a.cmp(b))
}

/// Lowercased letters of the given string with all diacritics stripped.
fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Lowercased letters of the given string with diacritics kept.
fn accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Case of every base letter in the given string.
fn case(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

#[cfg(test)]
mod spec {
    use std::cmp::Ordering;

    use super::compare;

    #[test]
    fn ignores_case_on_first_level() {
        assert_eq!(compare("alice", "Bob"), Ordering::Less);
        assert_eq!(compare("Bob", "alice"), Ordering::Greater);
        assert_eq!(compare("Zed", "adam"), Ordering::Greater);
    }

    #[test]
    fn puts_lowercase_first_on_ties() {
        assert_eq!(compare("alice", "Alice"), Ordering::Less);
        assert_eq!(compare("Alice", "alice"), Ordering::Greater);
        assert_eq!(compare("Alice", "Alice"), Ordering::Equal);
    }

    #[test]
    fn orders_accented_letters_by_base_letter() {
        assert_eq!(compare("Émile", "Emma"), Ordering::Less);
        assert_eq!(compare("resume", "résumé"), Ordering::Less);
        assert_eq!(compare("Zoë", "Zoey"), Ordering::Less);
    }

    #[test]
    fn shorter_prefix_goes_first() {
        assert_eq!(compare("Ann", "Anna"), Ordering::Less);
        assert_eq!(compare("", "a"), Ordering::Less);
    }
}
