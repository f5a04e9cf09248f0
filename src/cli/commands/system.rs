use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::shell_context::ShellContext;
use crate::storage::SNAPSHOT_SCHEMA_VERSION;
use crate::utils::build_info;

use super::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    section(format!("Budget Pulse {}", meta.version));
    io::print_info(format!("  Snapshot ver : v{}", SNAPSHOT_SCHEMA_VERSION));
    io::print_info(format!("  Build hash   : {} ({})", meta.hash, meta.status));
    io::print_info(format!("  Built at     : {}", meta.timestamp));
    io::print_info(format!("  Target       : {}", meta.target));
    io::print_info(format!("  Profile      : {}", meta.profile));
    io::print_info(format!("  Rustc        : {}", meta.rustc));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => {
                section(format!("Help: {}", entry.name));
                io::print_info(format!("  Description: {}", entry.description));
                io::print_info(format!("  Usage: {}", entry.usage));
            }
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    section("Available commands");
    for entry in context.registry.iter() {
        io::print_info(format!("  {:<14} {}", entry.name, entry.description));
    }
    io::print_info("Use `help <command>` for details.");
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
