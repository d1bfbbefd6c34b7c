use crate::cli::args::OutputFormat;
use crate::extraction::FileExtraction;

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub format: OutputFormat,
    pub context: bool,
}

#[derive(Debug)]
pub struct ScanSummary {
    pub format: OutputFormat,
    /// Paths that could not be accessed while walking the project.
    pub skipped_count: usize,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running rcstrings commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Per-file extraction results, in input order.
    /// Empty for `init`.
    pub files: Vec<FileExtraction>,
    /// Number of failures that should make the process exit non-zero
    /// (unreadable files, existing config on `init`).
    pub error_count: usize,
}

impl CommandResult {
    pub fn string_count(&self) -> usize {
        self.files.iter().map(|f| f.entries.len()).sum()
    }
}
