//! Extraction over many files.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use super::source::read_source;
use crate::extraction::{FileExtraction, extract_entries};

/// Extract strings from `files` (resolved against `root`) in parallel.
///
/// Results keep the order of `files`. A file that cannot be read produces a
/// result with `error` set instead of failing the batch. With `unique`, a
/// string already seen in an earlier entry or file is dropped.
pub fn extract_files(root: &Path, files: &[PathBuf], unique: bool) -> Vec<FileExtraction> {
    let mut results: Vec<FileExtraction> = files
        .par_iter()
        .map(|file| extract_file(&root.join(file), display_path(file)))
        .collect();

    if unique {
        retain_first_occurrences(&mut results);
    }

    results
}

fn extract_file(path: &Path, display: String) -> FileExtraction {
    match read_source(path) {
        Ok(text) => FileExtraction {
            path: display,
            entries: extract_entries(&text),
            error: None,
        },
        Err(e) => FileExtraction {
            path: display,
            entries: Vec::new(),
            error: Some(format!("{:#}", e)),
        },
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn retain_first_occurrences(results: &mut [FileExtraction]) {
    let mut seen: HashSet<String> = HashSet::new();
    for result in results {
        result.entries.retain(|e| seen.insert(e.text.clone()));
    }
}
