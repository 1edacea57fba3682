pub mod check_duplicates;
mod command_result;
pub mod extract;
pub mod init;

pub use command_result::*;
