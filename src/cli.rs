//! CLI interface for the resume extractor

use crate::extract::DocumentKind;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-extractor")]
#[command(about = "Keyword and regex based field extraction for resumes and job descriptions")]
#[command(
    long_about = "Extract structured fields (name, skills, experience, job title, ...) from resume and job description files using a fixed keyword vocabulary and regex patterns"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Vocabulary override file (TOML)
    #[arg(long, global = true)]
    pub vocabulary: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract structured fields from a document
    Extract {
        /// Path to the document (PDF, TXT, MD)
        file: PathBuf,

        /// Document kind: auto, resume, job
        #[arg(short, long, default_value = "auto")]
        kind: String,

        /// Output format: console, json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file instead of printing
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show the active keyword vocabulary
    Vocab {
        /// Print as JSON instead of a readable listing
        #[arg(long)]
        json: bool,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json",
            format
        )),
    }
}

/// Parse the document kind flag; "auto" defers to the classifier
pub fn parse_document_kind(kind: &str) -> Result<Option<DocumentKind>, String> {
    match kind.to_lowercase().as_str() {
        "auto" => Ok(None),
        "resume" | "cv" => Ok(Some(DocumentKind::Resume)),
        "job" | "jd" | "job-description" => Ok(Some(DocumentKind::JobDescription)),
        _ => Err(format!(
            "Invalid document kind: {}. Supported: auto, resume, job",
            kind
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
