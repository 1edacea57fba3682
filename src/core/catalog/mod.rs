//! PO catalog reading and writing.
//!
//! Only the subset of the PO format this tool produces is understood: a
//! `#:` source reference, a single-line-or-more `msgid`, and a `msgstr`.
//! Text is never unescaped; whatever sits between the quotes in the source
//! literal is what lands between the quotes in the catalog.

mod reader;
mod writer;

pub(crate) use reader::msgid_matches;
pub use reader::{read_catalog_keys, read_keys};
pub use writer::{CatalogWriter, append_entries, format_entry};

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// File name (not path) of the source the key was extracted from.
    pub source_ref: String,
    /// The `msgid` text.
    pub key: String,
    /// The `msgstr` text, empty for freshly extracted entries.
    pub translation: String,
}

impl CatalogEntry {
    /// A freshly extracted entry with an empty translation.
    pub fn untranslated(source_ref: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            source_ref: source_ref.into(),
            key: key.into(),
            translation: String::new(),
        }
    }
}
