//! Structured records produced by the extractors
//!
//! Records are plain values: built once per extraction call and never
//! mutated afterwards. Every field has a documented default so that an
//! empty document still yields a complete record. The serde field names
//! define the JSON shape consumed by downstream storage and display.

use serde::{Deserialize, Serialize};

/// Structured fields extracted from a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionRecord {
    pub job_title: String,
    pub required_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub years_of_experience: u32,
    pub degree: String,
    pub tools_and_platforms: Vec<String>,
    pub certifications: Vec<String>,
}

impl Default for JobDescriptionRecord {
    fn default() -> Self {
        Self {
            job_title: "Unknown".to_string(),
            required_skills: Vec::new(),
            soft_skills: Vec::new(),
            years_of_experience: 0,
            degree: "Not specified".to_string(),
            tools_and_platforms: Vec::new(),
            certifications: Vec::new(),
        }
    }
}

/// Structured fields extracted from a resume.
///
/// The list fields hold raw matching lines in original document order;
/// duplicate lines are preserved. `summary` is the empty string when the
/// document has no summary or objective line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub full_name: String,
    pub contact_info: ContactInfo,
    pub education: Vec<String>,
    pub technical_skills: Vec<String>,
    pub experience: Vec<String>,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
    pub summary: String,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            full_name: "Unknown".to_string(),
            contact_info: ContactInfo::default(),
            education: Vec::new(),
            technical_skills: Vec::new(),
            experience: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            summary: String::new(),
        }
    }
}

/// Contact details found in a resume. All keys stay present in the JSON
/// output, with `null` for anything not found. `address` is carried for
/// shape compatibility; no extraction rule populates it today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_job_record() {
        let record = JobDescriptionRecord::default();
        assert_eq!(record.job_title, "Unknown");
        assert_eq!(record.degree, "Not specified");
        assert_eq!(record.years_of_experience, 0);
        assert!(record.required_skills.is_empty());
    }

    #[test]
    fn test_resume_record_json_shape() {
        let record = ResumeRecord::default();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["full_name"], "Unknown");
        assert!(json["contact_info"]["phone"].is_null());
        assert!(json["contact_info"]["email"].is_null());
        assert!(json["contact_info"]["address"].is_null());
        assert_eq!(json["summary"], "");
        assert!(json["education"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_job_record_json_shape() {
        let record = JobDescriptionRecord::default();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["job_title"], "Unknown");
        assert_eq!(json["degree"], "Not specified");
        assert_eq!(json["years_of_experience"], 0);
        assert!(json["tools_and_platforms"].as_array().unwrap().is_empty());
    }
}
