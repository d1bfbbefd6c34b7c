//! Project-level file handling around the extractor.
//!
//! - `file_scanner`: discover resource scripts under a project root
//! - `source`: read and decode a resource script
//! - `batch`: extract from many files in parallel

pub mod batch;
pub mod file_scanner;
pub mod source;

pub use batch::extract_files;
pub use file_scanner::{ScanResult, scan_files};
pub use source::{decode_source, read_source};
