//! Duplicate `msgid` detection.
//!
//! `msgid` recognition is shared with the catalog reader, so the checker
//! and the merge engine always agree on what counts as a key.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use super::catalog::msgid_matches;
use crate::error::{Error, Result};

/// A `msgid` that already appeared earlier in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub key: String,
    /// 1-based line of the repeated `msgid`.
    pub line: usize,
    /// 1-based line of the first `msgid` with the same text.
    pub first_line: usize,
}

#[derive(Debug)]
pub struct DuplicateReport {
    pub catalog_path: PathBuf,
    /// Number of `msgid` entries inspected.
    pub key_count: usize,
    pub duplicates: Vec<DuplicateKey>,
}

impl DuplicateReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty()
    }
}

/// Find every repeated `msgid` in catalog content, in file order.
pub fn find_duplicates(text: &str) -> Vec<DuplicateKey> {
    scan_keys(text).1
}

/// Check the catalog file at `path` for repeated keys.
pub fn check_catalog(path: &Path) -> Result<DuplicateReport> {
    let content = fs::read_to_string(path).map_err(|source| Error::CatalogUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let (key_count, duplicates) = scan_keys(&content);
    Ok(DuplicateReport {
        catalog_path: path.to_path_buf(),
        key_count,
        duplicates,
    })
}

fn scan_keys(text: &str) -> (usize, Vec<DuplicateKey>) {
    let line_index = build_line_index(text);
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    let mut key_count = 0;

    for m in msgid_matches(text) {
        key_count += 1;
        let line = offset_to_line(&line_index, m.start());
        match first_seen.get(m.as_str()) {
            Some(&first_line) => duplicates.push(DuplicateKey {
                key: m.as_str().to_string(),
                line,
                first_line,
            }),
            None => {
                first_seen.insert(m.as_str(), line);
            }
        }
    }

    (key_count, duplicates)
}

/// Byte offsets where each line starts. Line 1 starts at offset 0.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// 1-based line number for a byte offset.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
