use super::{
    args::{Arguments, Command},
    commands::CommandResult,
    commands::{check_duplicates::check_duplicates, extract::extract, init::init},
};
use anyhow::Result;

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and error count
/// - `Err` if the command fails (e.g., unreadable source, invalid config)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::CheckDuplicates(cmd)) => check_duplicates(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
