//! Field extraction from normalized document text

pub mod classifier;
pub mod job;
pub mod record;
pub mod resume;
pub mod scanner;

pub use classifier::{DocumentExtractor, DocumentKind, ExtractedRecord};
pub use job::JobDescriptionExtractor;
pub use record::{ContactInfo, JobDescriptionRecord, ResumeRecord};
pub use resume::ResumeExtractor;
