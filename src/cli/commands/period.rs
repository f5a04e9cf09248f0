use crate::cli::core::{require_args, CommandResult};
use crate::cli::io;
use crate::cli::shell_context::ShellContext;
use crate::domain::{IsoDateRange, PeriodPreset};
use crate::period::{describe_range_adjustments, summarize_period_range};

use super::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "preset",
            "View this_month, last_month or year_to_date",
            "preset <this_month|last_month|year_to_date>",
            cmd_preset,
        ),
        CommandEntry::new(
            "range",
            "View a custom date range",
            "range <start> <end>",
            cmd_range,
        ),
        CommandEntry::new(
            "reset",
            "Restore sample entries and the default period",
            "reset",
            cmd_reset,
        ),
        CommandEntry::new("period", "Describe the active period", "period", cmd_period),
    ]
}

fn cmd_preset(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = require_args(args, 1, "preset <this_month|last_month|year_to_date>")?;
    let preset: PeriodPreset = args[0].parse()?;
    if preset == PeriodPreset::Custom {
        io::print_hint("Use `range <start> <end>` to pick custom dates.");
        return Ok(());
    }
    context.store.set_preset(preset);
    print_period(context);
    Ok(())
}

fn cmd_range(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = require_args(args, 2, "range <start> <end>")?;
    context.store.set_custom_range(args[0], args[1]);

    let state = context.store.current_state();
    let normalized = IsoDateRange {
        start: state.filter.start_date.clone(),
        end: state.filter.end_date.clone(),
    };
    let today = context.store.today();
    for adjustment in describe_range_adjustments(args[0], args[1], &normalized, today) {
        io::print_warning(adjustment);
    }
    print_period(context);
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.store.reset_filter();
    io::print_success("Sample entries and default period restored.");
    print_period(context);
    Ok(())
}

fn cmd_period(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    print_period(context);
    Ok(())
}

fn print_period(context: &ShellContext) {
    let state = context.store.current_state();
    let summary = summarize_period_range(&state.filter);
    let days = summary
        .day_count
        .map(|count| format!(" ({count} days)"))
        .unwrap_or_default();
    io::print_info(format!(
        "{}: {}{}",
        state.filter.preset.label(),
        summary.range_label,
        days
    ));
}
