use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::extraction::RcEntry;

// ============================================================
// Tool Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStringsParams {
    /// Path to the resource script (.rc) to extract from
    pub file_path: String,
    /// Number of entries to skip (default: 0)
    pub offset: Option<u32>,
    /// Maximum number of entries to return (default: 50, max: 500)
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path to the project root directory
    pub project_root_path: String,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub includes: Vec<String>,
    pub source_root: String,
    pub unique: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            ignores: c.ignores,
            includes: c.includes,
            source_root: c.source_root,
            unique: c.unique,
        }
    }
}

// ============================================================
// Extract Types (extract_strings)
// ============================================================

/// Result of extract_strings operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStringsResult {
    pub file_path: String,
    pub total_count: usize,
    pub items: Vec<StringItem>,
    pub pagination: Pagination,
}

/// A single extracted string
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StringItem {
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub text: String,
}

impl From<RcEntry> for StringItem {
    fn from(e: RcEntry) -> Self {
        Self {
            line: e.line,
            id: e.id,
            hint: e.hint,
            text: e.text,
        }
    }
}

// ============================================================
// Scan Overview Types (scan_overview)
// ============================================================

/// Result of scan_overview operation - counts only
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub total_strings: usize,
    pub file_count: usize,
    pub skipped_count: usize,
    pub files: Vec<FileStats>,
}

/// String count for one resource script
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    pub file_path: String,
    pub string_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================
// Common Types
// ============================================================

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
