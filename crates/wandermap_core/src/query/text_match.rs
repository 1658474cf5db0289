//! Case-insensitive substring matching.

use regex::{Regex, RegexBuilder};

/// Compiled search term.
///
/// An empty term matches every haystack.
#[derive(Debug, Clone)]
pub enum TextMatcher {
    Any,
    Pattern(Regex),
    /// Fallback for terms too large to compile.
    Lowercase(String),
}

impl TextMatcher {
    pub fn new(term: &str) -> Self {
        if term.is_empty() {
            return Self::Any;
        }
        RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
            .map(Self::Pattern)
            .unwrap_or_else(|_| Self::Lowercase(term.to_lowercase()))
    }

    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Pattern(pattern) => pattern.is_match(haystack),
            Self::Lowercase(term) => haystack.to_lowercase().contains(term.as_str()),
        }
    }

    /// True when any of `fields` contains the term.
    pub fn matches_any(&self, fields: &[&str]) -> bool {
        fields.iter().any(|field| self.matches(field))
    }
}

#[cfg(test)]
mod tests {
    use super::TextMatcher;

    #[test]
    fn empty_term_matches_everything() {
        let matcher = TextMatcher::new("");
        assert!(matcher.matches(""));
        assert!(matcher.matches("Tokyo"));
    }

    #[test]
    fn matching_ignores_case() {
        let matcher = TextMatcher::new("PaRiS");
        assert!(matcher.matches("Paris Trip"));
        assert!(matcher.matches("weekend in paris"));
        assert!(!matcher.matches("Tokyo"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let matcher = TextMatcher::new("st. (old)");
        assert!(matcher.matches("Visit St. (Old) Town"));
        assert!(!matcher.matches("Visit Stx Old Town"));
    }

    #[test]
    fn matches_any_checks_every_field() {
        let matcher = TextMatcher::new("rue");
        assert!(matcher.matches_any(&["Cafe de Flore", "172 Bd Saint-Germain", "12 Rue Cler"]));
        assert!(!matcher.matches_any(&["Louvre", "Paris"]));
    }
}
