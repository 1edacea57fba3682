//! Pattern extraction.
//!
//! Finds translation calls of the form `name("...")` in raw source text and
//! returns the literal contents. Matching is purely textual: the host
//! language is never parsed, so calls inside comments or unrelated strings
//! are picked up as well.
//!
//! A literal split across lines with the concatenation operator, e.g.
//!
//! ```text
//! t("Hello, " +
//!   "World")
//! ```
//!
//! is collapsed into the single logical string `Hello, World`.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::error::{Error, Result};

/// Matches a split marker inside an already captured literal: `"`, optional
/// whitespace (newlines included), `+`, optional whitespace, `"`.
static CONCAT_SPLIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""\s*\+\s*""#).unwrap());

/// Extracts translatable literals for one translation function.
#[derive(Debug, Clone)]
pub struct Extractor {
    call_regex: Regex,
}

impl Extractor {
    /// Build the call matcher for `function_name`.
    ///
    /// The name is matched literally. Names that can never form a
    /// `name("...")` call are rejected with [`Error::MalformedPattern`].
    pub fn new(function_name: &str) -> Result<Self> {
        validate_function_name(function_name)?;

        // Shortest run of anything, newlines included, up to the next `")`.
        let pattern = format!(r#"{}\("(?s:(.*?))"\)"#, regex::escape(function_name));
        let call_regex = Regex::new(&pattern).map_err(|e| Error::MalformedPattern {
            name: function_name.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { call_regex })
    }

    /// All literals in order of occurrence, duplicates included.
    pub fn extract(&self, source: &str) -> Vec<String> {
        self.call_regex
            .captures_iter(source)
            .filter_map(|caps| caps.get(1))
            .map(|m| collapse_concatenation(m.as_str()))
            .collect()
    }

    /// Like [`Extractor::extract`], keeping only the first occurrence of each literal.
    pub fn extract_unique(&self, source: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.extract(source)
            .into_iter()
            .filter(|text| seen.insert(text.clone()))
            .collect()
    }
}

/// One-shot form of [`Extractor::extract`].
pub fn extract(source: &str, function_name: &str) -> Result<Vec<String>> {
    Ok(Extractor::new(function_name)?.extract(source))
}

/// Remove concatenation split markers from a captured literal.
///
/// Only ever applied to the text between the call's outer quotes.
pub fn collapse_concatenation(captured: &str) -> String {
    CONCAT_SPLIT_REGEX.replace_all(captured, "").into_owned()
}

fn validate_function_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("function name is empty".to_string())
    } else if let Some(c) = name
        .chars()
        .find(|&c| c.is_whitespace() || matches!(c, '"' | '(' | ')'))
    {
        Some(format!("contains unsupported character {:?}", c))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::MalformedPattern {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
