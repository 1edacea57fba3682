use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use super::ScanTarget;
use crate::error::{Error, Result};

/// File-name globs are matched case-insensitively so `*.master` and
/// `*.Master` find the same files.
const NAME_MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Compile include globs, failing on the first invalid one.
pub fn compile_includes(includes: &[String]) -> Result<Vec<Pattern>> {
    includes
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::InvalidInclude {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Enumerate the files to scan under `target.root`.
///
/// Include patterns are applied in order and each walks the whole tree, so
/// files come out grouped by the first pattern that matched them. A file is
/// listed once even when several patterns match it. Files whose containing
/// directory is exactly one of the excluded directories are skipped; files in
/// subdirectories of an excluded directory are still listed.
pub fn collect_files(target: &ScanTarget) -> Result<Vec<PathBuf>> {
    let patterns = compile_includes(&target.includes)?;
    let root = normalize(&target.root);
    let excluded: HashSet<PathBuf> = target
        .excludes
        .iter()
        .map(|dir| normalize(&root.join(dir)))
        .collect();

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files = Vec::new();

    for pattern in &patterns {
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let name_matches = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| pattern.matches_with(name, NAME_MATCH_OPTIONS));
            if !name_matches {
                continue;
            }

            if path.parent().is_some_and(|dir| excluded.contains(dir)) {
                continue;
            }

            if seen.insert(path.to_path_buf()) {
                files.push(path.to_path_buf());
            }
        }
    }

    Ok(files)
}

/// Resolve symlinks and `..` where the path exists, so exclusions compare
/// against the same spelling the walker produces.
fn normalize(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
