//! Resume field extraction

use crate::error::Result;
use crate::extract::record::{ContactInfo, ResumeRecord};
use crate::extract::scanner::VocabularyScanner;
use crate::vocabulary::KeywordVocabulary;
use regex::Regex;

/// Extracts structured fields from resume text. Like the job description
/// extractor this is a pure function of the input text and the vocabulary.
pub struct ResumeExtractor {
    email_pattern: Regex,
    phone_pattern: Regex,
    summary_pattern: Regex,
    tools: VocabularyScanner,
    degrees: VocabularyScanner,
    certifications: VocabularyScanner,
}

impl ResumeExtractor {
    pub fn new(vocabulary: &KeywordVocabulary) -> Result<Self> {
        let email_pattern = Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+")
            .expect("Invalid email regex");
        let phone_pattern = Regex::new(r"\+?\d[\d\s\-]{7,15}")
            .expect("Invalid phone regex");
        let summary_pattern = Regex::new(r"(summary|objective)[:\-]?\s*(.+)")
            .expect("Invalid summary regex");

        Ok(Self {
            email_pattern,
            phone_pattern,
            summary_pattern,
            tools: VocabularyScanner::new(&vocabulary.tools_and_libraries)?,
            degrees: VocabularyScanner::new(&vocabulary.degrees)?,
            certifications: VocabularyScanner::new(&vocabulary.certifications)?,
        })
    }

    /// Extract all resume fields. Missing content degrades to per-field
    /// defaults, never an error.
    pub fn extract(&self, text: &str) -> ResumeRecord {
        let text = text.to_lowercase();

        ResumeRecord {
            full_name: self.extract_full_name(&text),
            contact_info: self.extract_contact_info(&text),
            education: self.extract_education(&text),
            technical_skills: self.tools.matches(&text),
            experience: collect_lines_containing(&text, "experience"),
            projects: collect_lines_containing(&text, "project"),
            certifications: self.certifications.matches(&text),
            summary: self.extract_summary(&text),
        }
    }

    /// Best-effort name heuristic: the first non-empty line with at most
    /// four words, title-cased. Misfires on decorative headers are accepted.
    fn extract_full_name(&self, text: &str) -> String {
        for line in text.lines() {
            let trimmed = line.trim();
            if !trimmed.is_empty() && trimmed.split_whitespace().count() <= 4 {
                return title_case(trimmed);
            }
        }
        "Unknown".to_string()
    }

    /// Email and phone via regex; the phone keeps its original spacing and
    /// dashes. Address has no extraction rule and stays empty.
    fn extract_contact_info(&self, text: &str) -> ContactInfo {
        let email = self
            .email_pattern
            .find(text)
            .map(|m| m.as_str().to_string());

        let phone = self
            .phone_pattern
            .find(text)
            .map(|m| m.as_str().trim().to_string());

        ContactInfo {
            phone,
            email,
            address: None,
        }
    }

    /// Every line mentioning a degree keyword, trimmed, in document order.
    /// Duplicate lines are preserved.
    fn extract_education(&self, text: &str) -> Vec<String> {
        text.lines()
            .filter(|line| self.degrees.is_match(line))
            .map(|line| line.trim().to_string())
            .collect()
    }

    /// Remainder of the first "summary:" or "objective:" mention; empty
    /// string when the resume has neither.
    fn extract_summary(&self, text: &str) -> String {
        self.summary_pattern
            .captures(text)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }
}

/// Lines containing `needle` as a substring, trimmed, in document order.
fn collect_lines_containing(text: &str, needle: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.contains(needle))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Uppercase the first letter of every alphabetic run, Python `str.title`
/// style, so "john o'brien" becomes "John O'Brien".
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_alphabetic = false;

    for c in text.chars() {
        if c.is_alphabetic() && !prev_alphabetic {
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
        prev_alphabetic = c.is_alphabetic();
    }

    result
}
