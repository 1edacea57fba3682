use std::{collections::HashSet, fs, io, path::Path, sync::LazyLock};

use regex::{Match, Regex};

use crate::error::{Error, Result};

/// `msgid "<text>"` where the span ends at the quote that closes its line.
///
/// Keys are written verbatim, so they may hold `\"` escapes or raw quotes
/// such as `Name: " + name + "!`; only a quote followed by the line break
/// (or end of input) terminates the key.
static MSGID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)msgid\s*"(.*?)"[ \t]*(?:\r?\n|$)"#).unwrap());

/// Iterate over every `msgid` text in catalog content, in file order.
///
/// The returned matches borrow `text` and carry byte offsets, which the
/// duplicate checker uses for line numbers.
pub(crate) fn msgid_matches(text: &str) -> impl Iterator<Item = Match<'_>> {
    MSGID_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
}

/// Collect the set of `msgid` texts in catalog content.
///
/// Text is returned byte-exact; escapes are never interpreted.
pub fn read_keys(text: &str) -> HashSet<String> {
    msgid_matches(text).map(|m| m.as_str().to_string()).collect()
}

/// Read the known keys of the catalog at `path`.
///
/// A missing catalog is not an error: it simply has no keys yet.
pub fn read_catalog_keys(path: &Path) -> Result<HashSet<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(read_keys(&content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashSet::new()),
        Err(source) => Err(Error::CatalogUnreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}
