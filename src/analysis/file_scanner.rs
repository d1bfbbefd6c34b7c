use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::is_glob_pattern;

/// Result of scanning files.
pub struct ScanResult {
    /// Matching files, relative to the scan root, sorted.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// A set of include or ignore rules.
///
/// Glob patterns are matched against the path relative to the scan root
/// (with `/` separators); literal entries match as path prefixes.
struct PathRules {
    literals: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl PathRules {
    fn new(patterns: &[String], kind: &str, verbose: bool) -> Self {
        let mut literals = Vec::new();
        let mut globs = Vec::new();

        for p in patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid {} pattern '{}': {}",
                                "warning:".bold().yellow(),
                                kind,
                                p,
                                e
                            );
                        }
                    }
                }
            } else {
                literals.push(PathBuf::from(p.trim_start_matches("./")));
            }
        }

        Self { literals, globs }
    }

    fn matches(&self, rel_path: &Path, rel_str: &str) -> bool {
        self.literals.iter().any(|l| rel_path.starts_with(l))
            || self.globs.iter().any(|g| g.matches(rel_str))
    }
}

pub fn scan_files(
    root: &Path,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: Vec<PathBuf> = Vec::new();
    let mut skipped_count = 0;

    let includes = PathRules::new(includes, "include", verbose);
    let ignores = PathRules::new(ignore_patterns, "ignore", verbose);

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Ok(rel_path) = entry.path().strip_prefix(root) else {
            continue;
        };
        let rel_str = rel_path.to_string_lossy().replace('\\', "/");

        if ignores.matches(rel_path, &rel_str) {
            continue;
        }

        let included = includes.globs.iter().any(|g| g.matches(&rel_str))
            || (is_resource_script(rel_path)
                && includes.literals.iter().any(|l| rel_path.starts_with(l)));

        if included {
            files.push(rel_path.to_path_buf());
        }
    }

    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_resource_script(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("rc"))
}
