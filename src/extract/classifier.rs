//! Document type classification and extraction dispatch
//!
//! Callers can name the document kind explicitly; otherwise a marker-phrase
//! heuristic decides between resume and job description before dispatching
//! to the matching extractor.

use crate::error::Result;
use crate::extract::job::JobDescriptionExtractor;
use crate::extract::record::{JobDescriptionRecord, ResumeRecord};
use crate::extract::resume::ResumeExtractor;
use crate::vocabulary::KeywordVocabulary;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Resume,
    JobDescription,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Resume => write!(f, "Resume"),
            DocumentKind::JobDescription => write!(f, "Job Description"),
        }
    }
}

/// Output of a dispatched extraction: one of the two record shapes.
/// Serializes untagged so the JSON is the record itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtractedRecord {
    Resume(ResumeRecord),
    JobDescription(JobDescriptionRecord),
}

impl ExtractedRecord {
    pub fn kind(&self) -> DocumentKind {
        match self {
            ExtractedRecord::Resume(_) => DocumentKind::Resume,
            ExtractedRecord::JobDescription(_) => DocumentKind::JobDescription,
        }
    }
}

/// Phrases that signal a job posting rather than a resume.
const JOB_MARKERS: &[&str] = &[
    "job title",
    "job description",
    "responsibilities",
    "requirements",
    "qualifications",
    "we are looking",
    "we're looking",
    "about the role",
    "what you will do",
    "apply",
];

/// Phrases that signal a resume.
const RESUME_MARKERS: &[&str] = &[
    "summary",
    "objective",
    "education",
    "work experience",
    "professional experience",
    "projects",
    "references",
    "curriculum vitae",
];

/// Both extractors behind a single entry point.
pub struct DocumentExtractor {
    resume: ResumeExtractor,
    job: JobDescriptionExtractor,
}

impl DocumentExtractor {
    pub fn new(vocabulary: &KeywordVocabulary) -> Result<Self> {
        Ok(Self {
            resume: ResumeExtractor::new(vocabulary)?,
            job: JobDescriptionExtractor::new(vocabulary)?,
        })
    }

    /// Extract with an explicit kind, or classify first when none is given.
    pub fn extract(&self, text: &str, kind: Option<DocumentKind>) -> ExtractedRecord {
        let kind = kind.unwrap_or_else(|| Self::classify(text));
        log::debug!("Extracting document as {}", kind);

        match kind {
            DocumentKind::Resume => ExtractedRecord::Resume(self.resume.extract(text)),
            DocumentKind::JobDescription => {
                ExtractedRecord::JobDescription(self.job.extract(text))
            }
        }
    }

    /// Marker-phrase vote between the two kinds. Ties fall to Resume, the
    /// more common document in practice.
    pub fn classify(text: &str) -> DocumentKind {
        let text = text.to_lowercase();

        let job_score = JOB_MARKERS.iter().filter(|m| text.contains(*m)).count();
        let resume_score = RESUME_MARKERS.iter().filter(|m| text.contains(*m)).count();

        if job_score > resume_score {
            DocumentKind::JobDescription
        } else {
            DocumentKind::Resume
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_job_description() {
        let text = "Job Title: Backend Engineer\nResponsibilities:\n- build APIs\nRequirements:\n- 3+ years of experience\nApply today!";
        assert_eq!(
            DocumentExtractor::classify(text),
            DocumentKind::JobDescription
        );
    }

    #[test]
    fn test_classify_resume() {
        let text = "jane roe\nSummary: backend developer\nEducation\nBachelor of Science\nProjects\nWork Experience";
        assert_eq!(DocumentExtractor::classify(text), DocumentKind::Resume);
    }

    #[test]
    fn test_empty_text_defaults_to_resume() {
        assert_eq!(DocumentExtractor::classify(""), DocumentKind::Resume);
    }

    #[test]
    fn test_explicit_kind_overrides_classifier() {
        let vocab = KeywordVocabulary::default();
        let extractor = DocumentExtractor::new(&vocab).unwrap();

        let text = "Job Title: Data Engineer\nRequirements: SQL, 2+ years of experience\nApply now";
        let record = extractor.extract(text, Some(DocumentKind::Resume));
        assert_eq!(record.kind(), DocumentKind::Resume);
    }

    #[test]
    fn test_dispatch_produces_job_record() {
        let vocab = KeywordVocabulary::default();
        let extractor = DocumentExtractor::new(&vocab).unwrap();

        let text = "Job Title: Data Engineer\nResponsibilities: pipelines\nRequirements: SQL, 2+ years of experience\nApply now";
        let record = extractor.extract(text, None);

        match record {
            ExtractedRecord::JobDescription(job) => {
                assert_eq!(job.job_title, "data engineer");
                assert_eq!(job.years_of_experience, 2);
            }
            ExtractedRecord::Resume(_) => panic!("expected a job description record"),
        }
    }

    #[test]
    fn test_untagged_serialization() {
        let record = ExtractedRecord::JobDescription(JobDescriptionRecord::default());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["job_title"], "Unknown");
        assert!(json.get("JobDescription").is_none());
    }
}
