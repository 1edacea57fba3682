use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by the extraction and merge engine.
///
/// Every variant is fatal for the invocation that produced it: a scan either
/// runs to completion or stops at the first failure. Entries written before
/// the failure stay in the catalog and are valid.
#[derive(Debug, Error)]
pub enum Error {
    /// Append mode was requested for a catalog that does not exist.
    #[error("File: {} does not exist. Can't append data to it.", .0.display())]
    MissingCatalogForAppend(PathBuf),

    /// A matched source file could not be opened or decoded as UTF-8.
    #[error("Failed to read source file: {}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configured function name cannot produce a usable call matcher.
    #[error("Invalid function name \"{name}\": {reason}")]
    MalformedPattern { name: String, reason: String },

    #[error("Failed to read catalog: {}", path.display())]
    CatalogUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write catalog: {}", path.display())]
    CatalogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid include pattern \"{pattern}\"")]
    InvalidInclude {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Cannot access path while scanning")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
