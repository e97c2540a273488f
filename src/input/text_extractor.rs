//! Text extraction from various file formats

use crate::error::{ExtractorError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ExtractorError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ExtractorError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ExtractorError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await.map_err(ExtractorError::Io)?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Strip markdown formatting, keeping the text content with one line per
/// block so the line-based extraction heuristics still apply.
fn markdown_to_text(markdown: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(text) | Event::Code(text) => current.push_str(&text),
            Event::SoftBreak | Event::HardBreak => {
                lines.push(std::mem::take(&mut current));
            }
            Event::End(Tag::Heading(..))
            | Event::End(Tag::Paragraph)
            | Event::End(Tag::Item) => {
                lines.push(std::mem::take(&mut current));
            }
            _ => {}
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_stripping() {
        let markdown = "# John Doe\n\n**Software Engineer**\n\n- React\n- Node.js\n";
        let text = markdown_to_text(markdown);

        assert!(text.contains("John Doe"));
        assert!(text.contains("Software Engineer"));
        assert!(text.contains("React"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
    }

    #[test]
    fn test_markdown_keeps_line_structure() {
        let markdown = "# jane roe\n\nSummary: developer\n";
        let text = markdown_to_text(markdown);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "jane roe");
        assert_eq!(lines[1], "Summary: developer");
    }
}
