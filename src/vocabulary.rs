//! Keyword vocabulary shared by both extractors
//!
//! Four fixed lists of lowercase keywords matched as substrings of document
//! text. The defaults are compiled in; an optional TOML file can override
//! them. The vocabulary is loaded once and never mutated afterwards, so a
//! shared reference is safe across threads.

use crate::error::{ExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordVocabulary {
    pub degrees: Vec<String>,
    pub certifications: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools_and_libraries: Vec<String>,
}

impl Default for KeywordVocabulary {
    fn default() -> Self {
        Self {
            // List order matters: degree extraction is first-match-wins.
            degrees: to_strings(&[
                "bachelor", "b.sc", "b.e", "b.tech", "undergraduate",
                "master", "m.sc", "m.tech", "graduate", "phd", "ph.d",
            ]),
            certifications: to_strings(&[
                "aws", "azure", "google cloud", "gcp", "pmp",
                "coursera", "ibm", "oracle", "datacamp", "fusemachine",
            ]),
            soft_skills: to_strings(&[
                "communication", "teamwork", "problem solving", "adaptability",
                "leadership", "critical thinking", "time management", "collaboration",
            ]),
            tools_and_libraries: to_strings(&[
                // Programming and scripting
                "python", "java", "c++", "javascript", "sql", "bash", "go", "rust",
                // Data science and ML libraries
                "numpy", "pandas", "scikit-learn", "matplotlib", "seaborn", "xgboost",
                "lightgbm", "tensorflow", "keras", "pytorch", "huggingface",
                "transformers", "nltk", "spacy",
                // Web and backend frameworks
                "flask", "django", "fastapi", "node.js", "react", "vue.js", "spring",
                "express",
                // DevOps and deployment
                "docker", "kubernetes", "jenkins", "git", "github", "github actions",
                "terraform", "ansible", "heroku", "streamlit", "gradio",
                // Data and cloud platforms
                "aws", "azure", "gcp", "bigquery", "snowflake", "mysql", "postgresql",
                "mongodb", "tableau", "powerbi", "hive", "airflow", "mlflow", "dvc",
            ]),
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl KeywordVocabulary {
    /// Load the vocabulary, preferring a user override file when present.
    pub fn load() -> Result<Self> {
        let path = Self::vocabulary_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load a vocabulary override from a specific TOML file.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let vocabulary: KeywordVocabulary = toml::from_str(&content)
            .map_err(|e| ExtractorError::Configuration(format!("Failed to parse vocabulary: {}", e)))?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// Write the vocabulary as TOML, creating parent directories as needed.
    pub fn save(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Configuration(format!("Failed to serialize vocabulary: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    fn vocabulary_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-extractor")
            .join("vocabulary.toml")
    }

    /// Matching is case-insensitive against lowercased text, so every entry
    /// must itself be lowercase; an empty entry would match everything.
    fn validate(&self) -> Result<()> {
        let lists = [
            ("degrees", &self.degrees),
            ("certifications", &self.certifications),
            ("soft_skills", &self.soft_skills),
            ("tools_and_libraries", &self.tools_and_libraries),
        ];

        for (name, list) in lists {
            for entry in list {
                if entry.is_empty() {
                    return Err(ExtractorError::Configuration(format!(
                        "Empty keyword in {} list",
                        name
                    )));
                }
                if entry.chars().any(|c| c.is_uppercase()) {
                    return Err(ExtractorError::Configuration(format!(
                        "Keyword '{}' in {} list must be lowercase",
                        entry, name
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_is_lowercase() {
        let vocab = KeywordVocabulary::default();
        assert!(vocab.validate().is_ok());
    }

    #[test]
    fn test_degree_order_is_stable() {
        let vocab = KeywordVocabulary::default();
        assert_eq!(vocab.degrees.first().map(|s| s.as_str()), Some("bachelor"));
        assert_eq!(vocab.degrees.last().map(|s| s.as_str()), Some("ph.d"));
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.toml");

        let vocab = KeywordVocabulary::default();
        vocab.save(&path).unwrap();

        let loaded = KeywordVocabulary::load_from(&path).unwrap();
        assert_eq!(loaded.degrees, vocab.degrees);
        assert_eq!(loaded.tools_and_libraries, vocab.tools_and_libraries);
    }

    #[test]
    fn test_uppercase_entry_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.toml");

        let mut vocab = KeywordVocabulary::default();
        vocab.degrees.push("Bachelor".to_string());
        vocab.save(&path).unwrap();

        assert!(KeywordVocabulary::load_from(&path).is_err());
    }
}
