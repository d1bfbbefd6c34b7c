//! Extraction result types.
//!
//! - `RcEntry`: one translatable string with the context it was found in
//! - `FileExtraction`: all entries found in a single resource script

use serde::Serialize;

/// A translatable string found in a resource script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RcEntry {
    /// Line number (1-based) of the line holding the literal.
    pub line: usize,
    /// Resource id associated with the string (e.g. `ID_FILE_OPEN`,
    /// `IDD_ABOUT:CAPTION`), when one could be determined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-oriented context for translators (e.g. `MENUITEM ID_FILE_OPEN`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// The decoded string value.
    pub text: String,
}

/// Entries extracted from one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileExtraction {
    pub path: String,
    pub entries: Vec<RcEntry>,
    /// Set when the file could not be read; `entries` is empty in that case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileExtraction {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }
}
