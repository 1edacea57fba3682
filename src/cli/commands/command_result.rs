use std::path::PathBuf;

use crate::core::{DuplicateReport, ScanSummary};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    CheckDuplicates(DuplicateReport),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub scan: ScanSummary,
    /// Config file the run used, `None` when running on defaults.
    pub config_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct InitSummary {
    /// The configuration file that was written.
    pub path: PathBuf,
}

/// Result of running xtext commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}
