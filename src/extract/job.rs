//! Job description field extraction

use crate::error::Result;
use crate::extract::record::JobDescriptionRecord;
use crate::extract::scanner::VocabularyScanner;
use crate::vocabulary::KeywordVocabulary;
use regex::Regex;

/// Extracts structured fields from job description text using vocabulary
/// substring scans and a couple of line patterns. Pure: same text in, same
/// record out, no state carried between calls.
pub struct JobDescriptionExtractor {
    title_pattern: Regex,
    years_pattern: Regex,
    tools: VocabularyScanner,
    soft_skills: VocabularyScanner,
    degrees: VocabularyScanner,
    certifications: VocabularyScanner,
}

impl JobDescriptionExtractor {
    pub fn new(vocabulary: &KeywordVocabulary) -> Result<Self> {
        let title_pattern = Regex::new(r"job title[:\-]?\s*(.*)")
            .expect("Invalid job title regex");
        let years_pattern = Regex::new(r"(\d+)\+?\s+years? of experience")
            .expect("Invalid experience regex");

        Ok(Self {
            title_pattern,
            years_pattern,
            tools: VocabularyScanner::new(&vocabulary.tools_and_libraries)?,
            soft_skills: VocabularyScanner::new(&vocabulary.soft_skills)?,
            degrees: VocabularyScanner::new(&vocabulary.degrees)?,
            certifications: VocabularyScanner::new(&vocabulary.certifications)?,
        })
    }

    /// Extract all job description fields. Matching is case-insensitive;
    /// missing content degrades to the per-field defaults, never an error.
    pub fn extract(&self, text: &str) -> JobDescriptionRecord {
        let text = text.to_lowercase();

        JobDescriptionRecord {
            job_title: self.extract_job_title(&text),
            // required_skills and tools_and_platforms are distinct fields
            // fed by the same scan; downstream consumers rely on both.
            required_skills: self.tools.matches(&text),
            soft_skills: self.soft_skills.matches(&text),
            years_of_experience: self.extract_years_of_experience(&text),
            degree: self.extract_degree(&text),
            tools_and_platforms: self.tools.matches(&text),
            certifications: self.certifications.matches(&text),
        }
    }

    /// Remainder of the first "job title:" line, trimmed. No capitalization
    /// is applied to the title.
    fn extract_job_title(&self, text: &str) -> String {
        self.title_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// First "N+ years of experience" style mention, 0 when absent.
    fn extract_years_of_experience(&self, text: &str) -> u32 {
        self.years_pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    }

    /// First degree keyword present in the text, in vocabulary order, with
    /// its first letter capitalized.
    fn extract_degree(&self, text: &str) -> String {
        self.degrees
            .first_match(text)
            .map(capitalize)
            .unwrap_or_else(|| "Not specified".to_string())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
