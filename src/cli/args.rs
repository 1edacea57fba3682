//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract translatable strings into `<root>/POs/<language>.po`
//! - `check-duplicates`: Report repeated `msgid` keys in a catalog
//! - `init`: Initialize an xtext configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.verbose,
            Some(Command::CheckDuplicates(_)) | Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Translation function to look for, e.g. `t` for `t("Save")`
    pub function: String,

    /// Root folder of the source tree
    pub root: PathBuf,

    /// Target language code; the catalog is written to <ROOT>/POs/<LANGUAGE>.po
    pub language: String,

    /// Comma-separated list of folders whose files are skipped
    /// (relative paths are resolved against the current directory)
    #[arg(value_delimiter = ',')]
    pub excludes: Vec<PathBuf>,

    /// File-name glob to scan (overrides config file)
    /// Can be specified multiple times: --include '*.cs' --include '*.cshtml'
    #[arg(long = "include")]
    pub includes: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckDuplicatesCommand {
    /// PO catalog to inspect
    pub catalog: PathBuf,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings from a source tree into a PO catalog
    Extract(ExtractCommand),
    /// Report msgid keys that appear more than once in a PO catalog
    CheckDuplicates(CheckDuplicatesCommand),
    /// Initialize a new .xtextrc.json configuration file
    Init,
}
