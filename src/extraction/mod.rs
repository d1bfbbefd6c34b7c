//! Resource script string extraction.
//!
//! ## Module Structure
//!
//! - `extract`: the line scanner (`extract`, `extract_entries`, `step`)
//! - `literal`: literal scanning and unescaping
//! - `normalize`: line normalization for keyword matching
//! - `results`: result types
//! - `state`: `BEGIN`/`END` block tracking

pub mod extract;
pub mod literal;
pub mod normalize;
pub mod results;
pub mod state;

pub use extract::{Capture, LineOutcome, extract, extract_entries, step};
pub use literal::decode_literal;
pub use results::{FileExtraction, RcEntry};
pub use state::{BlockState, Construct};
