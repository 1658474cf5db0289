//! Human-friendly string ordering for "A-Z" sorts.
//!
//! # Invariants
//! - Primary key: canonically decomposed, mark-stripped, lowercased chars,
//!   so "Évian" sorts with "evian" and "amsterdam" before "Berlin".
//! - Accents break primary ties: unaccented before accented.
//! - Case breaks the remaining ties: lowercase first.
//! - Raw code point order is the final tie-break, so only identical strings
//!   compare equal.

use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

pub fn locale_compare(left: &str, right: &str) -> Ordering {
    base_key(left)
        .cmp(base_key(right))
        .then_with(|| accent_key(left).cmp(accent_key(right)))
        .then_with(|| case_order(left, right))
        .then_with(|| left.cmp(right))
}

fn base_key(value: &str) -> impl Iterator<Item = char> + '_ {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn accent_key(value: &str) -> impl Iterator<Item = char> + '_ {
    value.nfd().flat_map(char::to_lowercase)
}

fn case_order(left: &str, right: &str) -> Ordering {
    left.nfd()
        .zip(right.nfd())
        .find(|(l, r)| l != r)
        .map_or(Ordering::Equal, |(l, r)| case_rank(l).cmp(&case_rank(r)))
}

fn case_rank(c: char) -> u8 {
    if c.is_lowercase() {
        0
    } else if c.is_uppercase() {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::locale_compare;
    use std::cmp::Ordering;

    #[test]
    fn ordering_ignores_case_at_first() {
        assert_eq!(locale_compare("amsterdam", "Berlin"), Ordering::Less);
        assert_eq!(locale_compare("Zurich", "athens"), Ordering::Greater);
        assert_eq!(locale_compare("Paris Trip", "Tokyo Trip"), Ordering::Less);
    }

    #[test]
    fn lowercase_precedes_uppercase_on_ties() {
        assert_eq!(locale_compare("rome", "Rome"), Ordering::Less);
        assert_eq!(locale_compare("Rome", "rome"), Ordering::Greater);
        assert_eq!(locale_compare("Rome", "Rome"), Ordering::Equal);
    }

    #[test]
    fn prefixes_sort_first() {
        assert_eq!(locale_compare("", "A"), Ordering::Less);
        assert_eq!(locale_compare("Nice", "Nice Trip"), Ordering::Less);
    }

    #[test]
    fn accented_letters_sort_with_their_base_letter() {
        assert_eq!(locale_compare("Évian-les-Bains", "Paris"), Ordering::Less);
        assert_eq!(locale_compare("Óbidos", "Zurich"), Ordering::Less);
        assert_eq!(locale_compare("Athens", "Évian-les-Bains"), Ordering::Less);
        assert_eq!(locale_compare("Zürich", "Zug"), Ordering::Greater);
    }

    #[test]
    fn unaccented_precedes_accented_on_ties() {
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "Resume"), Ordering::Greater);
        assert_eq!(locale_compare("Évian", "évian"), Ordering::Greater);
    }

    #[test]
    fn composed_and_decomposed_forms_compare_by_code_point_last() {
        let composed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        assert_ne!(locale_compare(composed, decomposed), Ordering::Equal);
        assert_eq!(locale_compare(composed, "cafe"), Ordering::Greater);
    }
}
