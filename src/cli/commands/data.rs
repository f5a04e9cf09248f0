use std::path::PathBuf;

use crate::cli::core::{require_args, CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::shell_context::ShellContext;
use crate::domain::{demo_entries, PrimaryCategory};
use crate::storage::{JsonStorage, StorageBackend};

use super::CommandEntry;

const DEFAULT_DEMO_COUNT: usize = 24;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("clear", "Remove every entry", "clear", cmd_clear),
        CommandEntry::new(
            "seed-demo",
            "Replace entries with generated demo data",
            "seed-demo [count]",
            cmd_seed_demo,
        ),
        CommandEntry::new("save", "Save entries and period to JSON", "save [path]", cmd_save),
        CommandEntry::new("load", "Load entries and period from JSON", "load [path]", cmd_load),
        CommandEntry::new(
            "subcategories",
            "List suggested subcategories",
            "subcategories <income|fixed|variable>",
            cmd_subcategories,
        ),
    ]
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.confirm("Remove every entry?")? {
        io::print_info("Nothing cleared.");
        return Ok(());
    }
    context.store.clear();
    io::print_success("All entries cleared.");
    Ok(())
}

fn cmd_seed_demo(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let count = match args.first() {
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a valid count"))
        })?,
        None => DEFAULT_DEMO_COUNT,
    };
    let entries = demo_entries(context.store.today(), count);
    context.store.seed(entries);
    io::print_success(format!("Seeded {count} demo entries."));
    Ok(())
}

fn target_path(context: &ShellContext, args: &[&str]) -> PathBuf {
    args.first()
        .map(PathBuf::from)
        .unwrap_or_else(|| context.data_file.clone())
}

fn cmd_save(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let storage = JsonStorage::new(target_path(context, args))?;
    storage.save(&context.store.snapshot())?;
    io::print_success(format!("Saved to {}.", storage.path().display()));
    Ok(())
}

fn cmd_load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let storage = JsonStorage::new(target_path(context, args))?;
    let snapshot = storage.load()?;
    context.store.restore(snapshot);
    let state = context.store.current_state();
    io::print_success(format!(
        "Loaded {} entries from {}.",
        state.entries.len(),
        storage.path().display()
    ));
    Ok(())
}

fn cmd_subcategories(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = require_args(args, 1, "subcategories <income|fixed|variable>")?;
    let category: PrimaryCategory = args[0].parse()?;
    section(category.label());
    for name in context.store.subcategories(category) {
        io::print_info(format!("  {name}"));
    }
    Ok(())
}
