use crate::cli::core::{require_args, CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::{self, fit, paint, section};
use crate::cli::shell_context::ShellContext;
use crate::currency::{format_iso_date, format_money, DEFAULT_DATE_PATTERN};
use crate::domain::{
    parse_amount, Displayable, Identifiable, PrimaryCategory, TransactionDraft, TransactionEntry,
};
use crate::period::{parse_iso_date, summarize_period_range};

use super::CommandEntry;

const ADD_USAGE: &str = "add <date> <category> <subcategory|-> <amount> <label...>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record an income or expense entry", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "remove",
            "Remove an entry by id prefix",
            "remove <id-prefix>",
            cmd_remove,
        ),
        CommandEntry::new(
            "list",
            "List entries in the active period (or all)",
            "list [all]",
            cmd_list,
        ),
        CommandEntry::new("kpis", "Show totals, weekly trend and category share", "kpis", cmd_kpis),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = require_args(args, 5, ADD_USAGE)?;
    let date = args[0];
    let category: PrimaryCategory = args[1].parse()?;
    let sub_category = match args[2] {
        "-" => String::new(),
        other => other.to_string(),
    };
    let amount = parse_amount(args[3])?;
    let label = args[4..].join(" ");

    if parse_iso_date(date).is_none() {
        io::print_warning(format!(
            "`{date}` is not a recognised date; the entry will sort last and match no period."
        ));
    }

    let id = context.store.add_entry(TransactionDraft::new(
        date,
        label,
        category,
        sub_category,
        amount,
    ));
    let state = context.store.current_state();
    if let Some(entry) = state.entries.iter().find(|entry| entry.id == id) {
        io::print_success(format!(
            "Added {} `{}` for {}.",
            entry.short_id(),
            entry.label,
            format_money(entry.amount, &context.money_style())
        ));
    }
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let args = require_args(args, 1, "remove <id-prefix>")?;
    let prefix = args[0].to_ascii_lowercase().replace('-', "");
    if prefix.is_empty() {
        return Err(CommandError::InvalidArguments("id prefix must not be empty".into()));
    }

    let state = context.store.current_state();
    let matches: Vec<&TransactionEntry> = state
        .entries
        .iter()
        .filter(|entry| entry.id.simple().to_string().starts_with(&prefix))
        .collect();

    match matches.as_slice() {
        [] => {
            io::print_warning(format!("No entry matches `{}`.", args[0]));
            Ok(())
        }
        [entry] => {
            let description = format!("{} {}", entry.short_id(), entry.display_label());
            context.store.remove_entry(entry.id());
            io::print_success(format!("Removed {description}."));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` matches {} entries; use a longer prefix",
            args[0],
            matches.len()
        ))),
    }
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let state = context.store.current_state();
    let show_all = matches!(args.first(), Some(&"all"));
    let (title, entries) = if show_all {
        ("All entries".to_string(), &state.entries)
    } else {
        (
            summarize_period_range(&state.filter).range_label,
            &state.filtered_entries,
        )
    };

    let money = context.money_style();
    section(title);
    if entries.is_empty() {
        io::print_info("No entries.");
        return Ok(());
    }
    for entry in entries {
        let amount = format!("{:>12}", format_money(entry.amount, &money));
        println!(
            "  {}  {}  {}  {}  {}",
            entry.short_id(),
            fit(&format_iso_date(&entry.date, DEFAULT_DATE_PATTERN), 12),
            fit(&entry.label, 28),
            fit(category_column(entry), 18),
            paint(&amount, context.store.accent_for(entry))
        );
    }
    io::print_info(format!("{} entries", entries.len()));
    Ok(())
}

fn category_column(entry: &TransactionEntry) -> &str {
    if entry.sub_category.is_empty() {
        entry.primary_category.label()
    } else {
        &entry.sub_category
    }
}

fn cmd_kpis(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let state = context.store.current_state();
    let kpis = &state.kpis;
    let money = context.money_style();

    section(format!(
        "KPIs for {}",
        summarize_period_range(&state.filter).range_label
    ));
    let totals = [
        ("Total income    ", kpis.total_income),
        ("Total expenses  ", kpis.total_expenses),
        ("Amount saved    ", kpis.amount_saved),
        ("Leftover balance", kpis.leftover_balance),
    ];
    for (label, value) in totals {
        io::print_info(format!("{label}: {}", format_money(value, &money)));
    }

    output::section("Weekly trend");
    if kpis.trend_series.is_empty() {
        io::print_info("No dated entries in this period.");
    }
    for point in &kpis.trend_series {
        io::print_info(format!(
            "{:<8} income {:>12}  expenses {:>12}",
            point.label,
            format_money(point.income, &money),
            format_money(point.expenses, &money)
        ));
    }

    output::section("Category share");
    if kpis.category_share.is_empty() {
        io::print_info("No expenses in this period.");
    }
    for slice in &kpis.category_share {
        io::print_info(format!(
            "{:<18} {:>12}  {:>5.1}%",
            slice.category,
            format_money(slice.value, &money),
            slice.percentage
        ));
    }
    Ok(())
}
