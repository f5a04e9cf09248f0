//! Command-line host around [`TransactionStore`](crate::core::TransactionStore).

pub mod commands;
mod core;
pub mod io;
pub mod output;
mod shell;
pub mod shell_context;

pub use self::core::{CliError, CommandError, CommandResult};
pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
