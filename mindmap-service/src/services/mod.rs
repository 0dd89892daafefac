pub mod analyzer;
pub mod providers;

pub use analyzer::{AnalyzeError, NoteAnalyzer};
