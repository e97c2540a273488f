//! Record formatters: colored console view and JSON

use crate::error::Result;
use crate::extract::record::{JobDescriptionRecord, ResumeRecord};
use crate::extract::ExtractedRecord;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

/// Trait for rendering an extracted record into displayable text
pub trait RecordFormatter {
    fn format(&self, record: &ExtractedRecord) -> Result<String>;
}

/// Console formatter with colored section headers
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter producing the stable record shape
pub struct JsonFormatter {
    pretty: bool,
}

/// Render a record in the requested format.
pub fn render_record(record: &ExtractedRecord, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Console => ConsoleFormatter::new(true).format(record),
        OutputFormat::Json => JsonFormatter::new(true).format(record),
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn field(&self, name: &str, value: &str) -> String {
        let label = if self.use_colors {
            name.bold().to_string()
        } else {
            name.to_string()
        };
        format!("  {}: {}", label, value)
    }

    fn list_field(&self, name: &str, values: &[String]) -> String {
        let rendered = if values.is_empty() {
            "(none)".to_string()
        } else {
            values.join(", ")
        };
        self.field(name, &rendered)
    }

    fn format_job(&self, job: &JobDescriptionRecord) -> String {
        let mut out = Vec::new();
        out.push(self.header("Job Description"));
        out.push(self.field("Job title", &job.job_title));
        out.push(self.field(
            "Years of experience",
            &job.years_of_experience.to_string(),
        ));
        out.push(self.field("Degree", &job.degree));
        out.push(self.list_field("Required skills", &job.required_skills));
        out.push(self.list_field("Soft skills", &job.soft_skills));
        out.push(self.list_field("Tools and platforms", &job.tools_and_platforms));
        out.push(self.list_field("Certifications", &job.certifications));
        out.join("\n")
    }

    fn format_resume(&self, resume: &ResumeRecord) -> String {
        let missing = "(not found)".to_string();
        let mut out = Vec::new();
        out.push(self.header("Resume"));
        out.push(self.field("Full name", &resume.full_name));
        out.push(self.field(
            "Email",
            resume.contact_info.email.as_ref().unwrap_or(&missing),
        ));
        out.push(self.field(
            "Phone",
            resume.contact_info.phone.as_ref().unwrap_or(&missing),
        ));
        out.push(self.field(
            "Summary",
            if resume.summary.is_empty() {
                &missing
            } else {
                &resume.summary
            },
        ));
        out.push(self.list_field("Education", &resume.education));
        out.push(self.list_field("Technical skills", &resume.technical_skills));
        out.push(self.list_field("Experience", &resume.experience));
        out.push(self.list_field("Projects", &resume.projects));
        out.push(self.list_field("Certifications", &resume.certifications));
        out.join("\n")
    }
}

impl RecordFormatter for ConsoleFormatter {
    fn format(&self, record: &ExtractedRecord) -> Result<String> {
        Ok(match record {
            ExtractedRecord::JobDescription(job) => self.format_job(job),
            ExtractedRecord::Resume(resume) => self.format_resume(resume),
        })
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl RecordFormatter for JsonFormatter {
    fn format(&self, record: &ExtractedRecord) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::record::ContactInfo;

    fn sample_resume() -> ExtractedRecord {
        ExtractedRecord::Resume(ResumeRecord {
            full_name: "Jane Roe".to_string(),
            contact_info: ContactInfo {
                phone: Some("+1 555-123-4567".to_string()),
                email: Some("jane@example.com".to_string()),
                address: None,
            },
            education: vec!["bachelor of science".to_string()],
            technical_skills: vec!["python".to_string(), "sql".to_string()],
            experience: vec!["3 years of experience".to_string()],
            projects: Vec::new(),
            certifications: vec!["aws".to_string()],
            summary: "backend developer".to_string(),
        })
    }

    #[test]
    fn test_console_format_without_colors() {
        let formatter = ConsoleFormatter::new(false);
        let text = formatter.format(&sample_resume()).unwrap();

        assert!(text.contains("Full name: Jane Roe"));
        assert!(text.contains("Email: jane@example.com"));
        assert!(text.contains("Technical skills: python, sql"));
        assert!(text.contains("Projects: (none)"));
    }

    #[test]
    fn test_json_format_shape() {
        let formatter = JsonFormatter::new(false);
        let json = formatter.format(&sample_resume()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["full_name"], "Jane Roe");
        assert_eq!(value["contact_info"]["phone"], "+1 555-123-4567");
        assert!(value["contact_info"]["address"].is_null());
        assert_eq!(value["summary"], "backend developer");
    }

    #[test]
    fn test_json_format_job_record() {
        let record = ExtractedRecord::JobDescription(JobDescriptionRecord::default());
        let json = JsonFormatter::new(false).format(&record).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["job_title"], "Unknown");
        assert_eq!(value["degree"], "Not specified");
        assert_eq!(value["years_of_experience"], 0);
    }
}
