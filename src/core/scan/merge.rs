use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use super::{ScanTarget, file_scanner::collect_files};
use crate::core::{
    catalog::{CatalogEntry, CatalogWriter, read_catalog_keys},
    extract::Extractor,
};
use crate::error::{Error, Result};

/// What a single source file contributed to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    /// Distinct literals found in the file.
    pub extracted: usize,
    /// Entries written to the catalog for this file.
    pub added: usize,
}

/// Outcome of one full scan.
#[derive(Debug)]
pub struct ScanSummary {
    pub catalog_path: PathBuf,
    /// Whether the catalog existed before the scan started.
    pub catalog_existed: bool,
    pub files: Vec<FileReport>,
}

impl ScanSummary {
    pub fn files_scanned(&self) -> usize {
        self.files.len()
    }

    pub fn entries_added(&self) -> usize {
        self.files.iter().map(|f| f.added).sum()
    }

    pub fn contributing_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|f| f.added > 0)
    }
}

/// Merges extracted literals into a catalog.
#[derive(Debug, Clone)]
pub struct Scanner {
    extractor: Extractor,
}

impl Scanner {
    /// Build a scanner for `function_name`. Fails before any file is touched
    /// when the name cannot form a matcher.
    pub fn new(function_name: &str) -> Result<Self> {
        Ok(Self {
            extractor: Extractor::new(function_name)?,
        })
    }

    /// Walk `target`, extract literals from every matched file and append the
    /// ones the catalog does not know yet.
    ///
    /// The catalog is read once, before the walk. Keys written during the walk
    /// join the known set, so no key is written twice in one run. When no
    /// catalog existed the first contributing file creates it and later files
    /// append. Files contributing nothing cause no write at all.
    pub fn scan(&self, target: &ScanTarget, catalog_path: &Path) -> Result<ScanSummary> {
        let files = collect_files(target)?;

        if let Some(dir) = catalog_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| Error::CatalogWrite {
                path: catalog_path.to_path_buf(),
                source,
            })?;
        }

        let catalog_existed = catalog_path.is_file();
        let mut known_keys = if catalog_existed {
            read_catalog_keys(catalog_path)?
        } else {
            HashSet::new()
        };

        let mut writer: Option<CatalogWriter> = None;
        let mut reports = Vec::with_capacity(files.len());

        for path in files {
            let source = fs::read_to_string(&path).map_err(|source| Error::SourceUnreadable {
                path: path.clone(),
                source,
            })?;

            let extracted = self.extractor.extract_unique(&source);
            let source_ref = source_ref(&path);
            let entries: Vec<CatalogEntry> = extracted
                .iter()
                .filter(|key| !known_keys.contains(key.as_str()))
                .map(|key| CatalogEntry::untranslated(source_ref.as_str(), key.as_str()))
                .collect();

            if !entries.is_empty() {
                if writer.is_none() {
                    writer = Some(CatalogWriter::open(catalog_path, catalog_existed)?);
                }
                if let Some(writer) = writer.as_mut() {
                    writer.write_entries(&entries)?;
                }
                known_keys.extend(entries.iter().map(|e| e.key.clone()));
            }

            reports.push(FileReport {
                path,
                extracted: extracted.len(),
                added: entries.len(),
            });
        }

        Ok(ScanSummary {
            catalog_path: catalog_path.to_path_buf(),
            catalog_existed,
            files: reports,
        })
    }
}

/// One-shot form of [`Scanner::scan`].
pub fn scan(target: &ScanTarget, catalog_path: &Path, function_name: &str) -> Result<ScanSummary> {
    Scanner::new(function_name)?.scan(target, catalog_path)
}

/// The source reference written after `#:` is the bare file name.
fn source_ref(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
