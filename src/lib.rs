//! Resume extractor library

pub mod cli;
pub mod error;
pub mod extract;
pub mod input;
pub mod output;
pub mod vocabulary;

pub use error::{ExtractorError, Result};
pub use vocabulary::KeywordVocabulary;
