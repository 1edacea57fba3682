//! Extraction and merge engine.
//!
//! ## Module Structure
//!
//! - `extract`: finds `name("...")` calls in source text
//! - `catalog`: reads known keys from and writes entries to PO catalogs
//! - `scan`: walks a source tree and merges new keys into one catalog
//! - `duplicates`: reports repeated `msgid` keys in a catalog

pub mod catalog;
pub mod duplicates;
pub mod extract;
pub mod scan;

pub use catalog::{CatalogEntry, append_entries, format_entry, read_catalog_keys, read_keys};
pub use duplicates::{DuplicateKey, DuplicateReport, check_catalog, find_duplicates};
pub use extract::{Extractor, extract};
pub use scan::{FileReport, ScanSummary, ScanTarget, Scanner, catalog_path_for, scan};
