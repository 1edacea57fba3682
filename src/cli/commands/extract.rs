use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::super::args::ExtractCommand;
use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::{
    config::{CONFIG_FILE_NAME, load_config},
    core::{ScanTarget, Scanner, catalog_path_for},
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    // Fail on a bad function name before any file is touched.
    let scanner = Scanner::new(&cmd.function)?;

    if !cmd.root.is_dir() {
        bail!("Root folder does not exist: {}", cmd.root.display());
    }
    validate_language(&cmd.language)?;

    let loaded = load_config(&cmd.root)?;
    if cmd.verbose && !loaded.from_file() {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }
    let config_path = loaded.path;
    let config = loaded.config;

    let includes = if cmd.includes.is_empty() {
        config.includes
    } else {
        cmd.includes
    };
    // Config excludes are relative to the root; command-line ones to the
    // working directory, like any other path argument.
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    let excludes: Vec<PathBuf> = config
        .excludes
        .iter()
        .map(PathBuf::from)
        .chain(cmd.excludes.into_iter().map(|dir| cwd.join(dir)))
        .collect();

    let target = ScanTarget::new(&cmd.root)
        .with_includes(includes)
        .with_excludes(excludes);
    let catalog_path = catalog_path_for(&cmd.root, &config.catalog_dir, &cmd.language);

    let scan = scanner.scan(&target, &catalog_path)?;

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary { scan, config_path }),
        error_count: 0,
        exit_on_errors: false,
    })
}

/// The language code becomes a file name, so it must be a single path segment.
fn validate_language(language: &str) -> Result<()> {
    if language.trim().is_empty() {
        bail!("Language code must not be empty");
    }
    if language.contains(['/', '\\']) || language == "." || language == ".." {
        bail!("Invalid language code: \"{}\"", language);
    }
    Ok(())
}
