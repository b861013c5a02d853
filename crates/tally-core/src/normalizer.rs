//! Canonical subject names from noisy timetable and absence labels.
//!
//! Labels usually look like `SOCIAL PSYCHOLOGY BPSY201-4`: a display name
//! followed by a course code. The normalizer splits off a trailing code token
//! (three or more of `A-Z`, `0-9`, `-`) and keeps the name, provided the name
//! is longer than two characters. Every successful split is memoized under
//! the raw label, the code and the name itself, so later occurrences of any
//! of them resolve to the same canonical name.
//!
//! The split is purely lexical: a subject whose last word is itself
//! upper-case (`DATA STRUCTURES`) loses that word. Downstream grouping relies
//! on this exact rule, so it is kept as is.

use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_AND_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s+([A-Z0-9-]{3,})$").expect("valid regex"));

/// Names of this many characters or fewer are not accepted as a split.
const MIN_NAME_CHARS: usize = 2;

/// Memoizing subject-name normalizer owned by one loading session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectNormalizer {
    memo: HashMap<String, String>,
}

impl SubjectNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a raw label to its canonical subject name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::SubjectNormalizer;
    ///
    /// let mut names = SubjectNormalizer::new();
    /// assert_eq!(names.normalize("SOCIAL PSYCHOLOGY BPSY201-4"), "SOCIAL PSYCHOLOGY");
    /// assert_eq!(names.normalize("BPSY201-4"), "SOCIAL PSYCHOLOGY");
    /// assert_eq!(names.normalize("  Yoga  "), "Yoga");
    /// ```
    pub fn normalize(&mut self, raw: &str) -> String {
        let text = raw.trim();
        if let Some(known) = self.memo.get(text) {
            return known.clone();
        }

        let Some(caps) = NAME_AND_CODE.captures(text) else {
            return text.to_string();
        };
        let name = caps[1].trim();
        let code = caps[2].trim();
        if name.chars().count() <= MIN_NAME_CHARS {
            return text.to_string();
        }

        debug!("Subject '{text}' -> '{name}' (code {code})");
        self.memo.insert(code.to_string(), name.to_string());
        self.memo.insert(text.to_string(), name.to_string());
        self.memo
            .entry(name.to_string())
            .or_insert_with(|| name.to_string());
        name.to_string()
    }

    /// Registers an already-clean subject name so it maps to itself.
    ///
    /// Seeded names are checked before any splitting, so a clean name from
    /// an attendance summary is never shortened afterwards.
    pub fn seed(&mut self, clean: &str) {
        let clean = clean.trim();
        if !clean.is_empty() {
            self.memo.insert(clean.to_string(), clean.to_string());
        }
    }

    /// Memoized canonical name for a label, without splitting.
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        self.memo.get(raw.trim()).map(String::as_str)
    }

    /// Number of memoized labels.
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }

    /// Forgets every memoized mapping.
    pub fn clear(&mut self) {
        self.memo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_trailing_code() {
        let mut names = SubjectNormalizer::new();
        assert_eq!(
            names.normalize("SOCIAL PSYCHOLOGY BPSY201-4"),
            "SOCIAL PSYCHOLOGY"
        );
        assert_eq!(names.normalize("BPSY201-4"), "SOCIAL PSYCHOLOGY");
        assert_eq!(
            names.normalize("  SOCIAL PSYCHOLOGY BPSY201-4 "),
            "SOCIAL PSYCHOLOGY"
        );
    }

    #[test]
    fn test_unsplittable_text_is_trimmed_and_not_memoized() {
        let mut names = SubjectNormalizer::new();
        assert_eq!(names.normalize("  Mentoring hour "), "Mentoring hour");
        assert_eq!(names.normalize("MATH"), "MATH");
        assert!(names.is_empty());
    }

    #[test]
    fn test_short_name_part_is_rejected() {
        let mut names = SubjectNormalizer::new();
        // "AB" is only two characters long
        assert_eq!(names.normalize("AB CS101"), "AB CS101");
        assert!(names.lookup("CS101").is_none());
    }

    #[test]
    fn test_code_must_be_three_chars() {
        let mut names = SubjectNormalizer::new();
        assert_eq!(names.normalize("Statistics II"), "Statistics II");
        assert_eq!(names.normalize("Statistics III"), "Statistics");
    }

    #[test]
    fn test_lowercase_code_is_not_split() {
        let mut names = SubjectNormalizer::new();
        assert_eq!(names.normalize("Research methods bpsy301"), "Research methods bpsy301");
    }

    #[test]
    fn test_idempotent_after_memoization() {
        let mut names = SubjectNormalizer::new();
        for raw in [
            "SOCIAL PSYCHOLOGY BPSY201-4",
            "COGNITIVE SCIENCE BPSY202",
            "Yoga",
            "DATA STRUCTURES",
        ] {
            let once = names.normalize(raw);
            let twice = names.normalize(&once);
            assert_eq!(once, twice, "normalize is not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_seeded_name_wins() {
        let mut names = SubjectNormalizer::new();
        names.seed("DATA STRUCTURES");
        assert_eq!(names.normalize("DATA STRUCTURES"), "DATA STRUCTURES");

        let mut unseeded = SubjectNormalizer::new();
        assert_eq!(unseeded.normalize("DATA STRUCTURES"), "DATA");
    }

    #[test]
    fn test_later_code_reuse_resolves_consistently() {
        let mut names = SubjectNormalizer::new();
        names.normalize("ORGANIZATIONAL BEHAVIOUR BPSY305");
        assert_eq!(names.lookup("BPSY305"), Some("ORGANIZATIONAL BEHAVIOUR"));
        assert_eq!(names.normalize("BPSY305"), "ORGANIZATIONAL BEHAVIOUR");
    }

    #[test]
    fn test_clear_forgets_mappings() {
        let mut names = SubjectNormalizer::new();
        names.normalize("SOCIAL PSYCHOLOGY BPSY201-4");
        assert_eq!(names.len(), 3);
        names.clear();
        assert!(names.lookup("BPSY201-4").is_none());
    }
}
