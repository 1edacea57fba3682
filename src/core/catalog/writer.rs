use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use super::CatalogEntry;
use crate::error::{Error, Result};

/// Format one catalog entry, byte-exact:
/// `#: {source}\r\nmsgid "{key}"\r\nmsgstr "{translation}"\r\n\r\n`.
pub fn format_entry(entry: &CatalogEntry) -> String {
    format!(
        "#: {}\r\nmsgid \"{}\"\r\nmsgstr \"{}\"\r\n\r\n",
        entry.source_ref, entry.key, entry.translation
    )
}

/// Write `entries` to the catalog at `path`.
///
/// With `append == false` the file is created, truncating any existing
/// content. With `append == true` the file must already exist. An empty
/// `entries` slice leaves the file untouched.
pub fn append_entries(path: &Path, entries: &[CatalogEntry], append: bool) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }
    let mut writer = CatalogWriter::open(path, append)?;
    writer.write_entries(entries)
}

/// An open catalog file that entries are written to.
///
/// The merge driver keeps one of these for the whole walk instead of
/// reopening the catalog for every contributing source file.
#[derive(Debug)]
pub struct CatalogWriter {
    path: PathBuf,
    file: File,
}

impl CatalogWriter {
    /// Open `path` for writing, either creating it or appending to it.
    pub fn open(path: &Path, append: bool) -> Result<Self> {
        if append && !path.is_file() {
            return Err(Error::MissingCatalogForAppend(path.to_path_buf()));
        }

        let mut options = OpenOptions::new();
        if append {
            options.append(true);
        } else {
            options.write(true).create(true).truncate(true);
        }

        let file = options.open(path).map_err(|source| Error::CatalogWrite {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Write all entries in one buffer so a file's contribution lands at once.
    pub fn write_entries(&mut self, entries: &[CatalogEntry]) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let output: String = entries.iter().map(format_entry).collect();
        self.file
            .write_all(output.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|source| Error::CatalogWrite {
                path: self.path.clone(),
                source,
            })
    }
}
