//! Error handling for the resume extractor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Keyword matcher error: {0}")]
    KeywordMatcher(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for ExtractorError {
    fn from(err: anyhow::Error) -> Self {
        ExtractorError::InvalidInput(err.to_string())
    }
}
