use crate::cli::core::{CommandError, CommandResult};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::shell_context::ShellContext;
use crate::currency::format_money;
use crate::domain::PeriodPreset;

use super::CommandEntry;

const CONFIG_USAGE: &str =
    "config [show|set <locale|currency|default_preset|seed_sample_entries> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change saved preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show_config(context),
        ["set", key, value] => set_config_value(context, key, value),
        _ => Err(CommandError::InvalidArguments(format!("usage: {CONFIG_USAGE}"))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let config = &context.config;
    section("Configuration");
    io::print_info(format!("  locale              : {}", config.locale));
    io::print_info(format!("  currency            : {}", config.currency));
    io::print_info(format!("  default_preset      : {}", config.default_preset));
    io::print_info(format!("  seed_sample_entries : {}", config.seed_sample_entries));
    io::print_info(format!("  data file           : {}", context.data_file.display()));
    io::print_info(format!(
        "  sample amount       : {}",
        format_money(1254.24, &context.money_style())
    ));
    io::print_hint(format!("Saved in {}", context.config_manager.path().display()));
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut next = context.config.clone();
    match key.to_ascii_lowercase().as_str() {
        "locale" => next.locale = value.trim().to_string(),
        "currency" => next.currency = value.trim().to_ascii_uppercase(),
        "default_preset" => {
            let preset: PeriodPreset = value.parse()?;
            if preset == PeriodPreset::Custom {
                return Err(CommandError::InvalidArguments(
                    "default_preset must be this_month, last_month or year_to_date".into(),
                ));
            }
            next.default_preset = preset;
        }
        "seed_sample_entries" => {
            next.seed_sample_entries = match value.to_ascii_lowercase().as_str() {
                "on" | "true" | "yes" => true,
                "off" | "false" | "no" => false,
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "seed_sample_entries expects on or off, got `{other}`"
                    )))
                }
            };
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown config key `{other}`; usage: {CONFIG_USAGE}"
            )))
        }
    }

    context.config_manager.save(&next)?;
    context.config = next;
    io::print_success(format!("Saved {key} = {value}."));
    Ok(())
}
