use anyhow::Result;

use super::super::args::CheckDuplicatesCommand;
use super::{CommandResult, CommandSummary};
use crate::core::check_catalog;

pub fn check_duplicates(cmd: CheckDuplicatesCommand) -> Result<CommandResult> {
    let report = check_catalog(&cmd.catalog)?;

    Ok(CommandResult {
        error_count: report.duplicates.len(),
        summary: CommandSummary::CheckDuplicates(report),
        exit_on_errors: true,
    })
}
