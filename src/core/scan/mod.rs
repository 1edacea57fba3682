//! Tree walking and catalog merging.
//!
//! - `file_scanner`: enumerates source files under a root
//! - `merge`: feeds each file through the extractor and appends novel keys

mod file_scanner;
mod merge;

use std::path::{Path, PathBuf};

pub use file_scanner::{collect_files, compile_includes};
pub use merge::{FileReport, ScanSummary, Scanner, scan};

use crate::config::DEFAULT_INCLUDES;

/// Where and what to scan.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    pub root: PathBuf,
    /// File-name globs, e.g. `*.cs`.
    pub includes: Vec<String>,
    /// Directories whose direct children are skipped. Relative paths are
    /// resolved against `root`.
    pub excludes: Vec<PathBuf>,
}

impl ScanTarget {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            includes: DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect(),
            excludes: Vec::new(),
        }
    }

    pub fn with_includes(mut self, includes: Vec<String>) -> Self {
        self.includes = includes;
        self
    }

    pub fn with_excludes(mut self, excludes: Vec<PathBuf>) -> Self {
        self.excludes = excludes;
        self
    }
}

/// `<root>/<catalog_dir>/<language>.po`
pub fn catalog_path_for(root: &Path, catalog_dir: &str, language: &str) -> PathBuf {
    root.join(catalog_dir).join(format!("{}.po", language))
}
