//! xtext - an xgettext-like string extractor for PO catalogs
//!
//! xtext walks a source tree, finds calls of a translation function such as
//! `t("Save")`, and merges the literals it finds into `<root>/POs/<lang>.po`.
//! Re-running against an unchanged tree adds nothing, so the catalog only
//! ever grows by keys that are new.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, catalog and merge engine
//! - `error`: Error type shared by the engine

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

pub use error::{Error, Result};
