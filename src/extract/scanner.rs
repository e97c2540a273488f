//! Vocabulary substring scanning
//!
//! One Aho-Corasick pass over the text replaces a per-entry `contains` loop.
//! Results are reported in vocabulary list order, so list order stays the
//! observable tie-break for first-match extraction.

use crate::error::{ExtractorError, Result};
use aho_corasick::AhoCorasick;
use std::collections::HashSet;

pub struct VocabularyScanner {
    entries: Vec<String>,
    automaton: AhoCorasick,
}

impl VocabularyScanner {
    pub fn new(entries: &[String]) -> Result<Self> {
        let automaton = AhoCorasick::new(entries)
            .map_err(|e| ExtractorError::KeywordMatcher(format!("Failed to build scanner: {}", e)))?;

        Ok(Self {
            entries: entries.to_vec(),
            automaton,
        })
    }

    /// Every vocabulary entry occurring as a substring of `text`, in
    /// vocabulary order, each at most once no matter how often it occurs.
    pub fn matches(&self, text: &str) -> Vec<String> {
        let found = self.matched_ids(text);

        self.entries
            .iter()
            .enumerate()
            .filter(|(id, _)| found.contains(id))
            .map(|(_, entry)| entry.clone())
            .collect()
    }

    /// First vocabulary entry (in list order) occurring in `text`.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        let found = self.matched_ids(text);

        self.entries
            .iter()
            .enumerate()
            .find(|(id, _)| found.contains(id))
            .map(|(_, entry)| entry.as_str())
    }

    /// Whether any vocabulary entry occurs in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.automaton.is_match(text)
    }

    fn matched_ids(&self, text: &str) -> HashSet<usize> {
        // Overlapping search: nested patterns like "git" / "github" must
        // each count as present on their own.
        self.automaton
            .find_overlapping_iter(text)
            .map(|m| m.pattern().as_usize())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(entries: &[&str]) -> VocabularyScanner {
        let entries: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
        VocabularyScanner::new(&entries).unwrap()
    }

    #[test]
    fn test_matches_in_vocabulary_order() {
        let s = scanner(&["python", "java", "sql"]);
        let found = s.matches("we use sql and python daily");
        assert_eq!(found, vec!["python".to_string(), "sql".to_string()]);
    }

    #[test]
    fn test_repeated_occurrences_reported_once() {
        let s = scanner(&["python"]);
        let found = s.matches("python python python");
        assert_eq!(found, vec!["python".to_string()]);
    }

    #[test]
    fn test_overlapping_entries_all_found() {
        let s = scanner(&["git", "github", "github actions"]);
        let found = s.matches("ci runs on github actions");
        assert_eq!(
            found,
            vec![
                "git".to_string(),
                "github".to_string(),
                "github actions".to_string()
            ]
        );
    }

    #[test]
    fn test_first_match_follows_list_order() {
        let s = scanner(&["bachelor", "master", "phd"]);
        assert_eq!(s.first_match("holds a phd and a master"), Some("master"));
        assert_eq!(s.first_match("no degree here"), None);
    }

    #[test]
    fn test_plain_substring_semantics() {
        // Entries match inside longer words, same as a contains scan.
        let s = scanner(&["go"]);
        assert_eq!(s.matches("good communicator"), vec!["go".to_string()]);
    }

    #[test]
    fn test_empty_text() {
        let s = scanner(&["python"]);
        assert!(s.matches("").is_empty());
        assert!(!s.is_match(""));
    }
}
