//! Output rendering for extracted records

pub mod formatter;

pub use formatter::{render_record, OutputFormat};
