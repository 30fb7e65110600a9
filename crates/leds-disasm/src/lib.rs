pub mod analyze;

// Re-export for consumers of the report
pub use analyze::{analyze, find_loops, DiagOut, LabelOut, Loop, Report, Row};
