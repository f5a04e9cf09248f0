use std::{env, path::PathBuf, sync::Arc};

use dialoguer::theme::ColorfulTheme;
use tracing::debug;

use crate::{
    config::{Config, ConfigManager},
    core::{Clock, FixedClock, SystemClock, TransactionStore},
    currency::MoneyStyle,
    errors::PulseError,
    period::parse_iso_date,
};

use super::commands::{self, CommandEntry, CommandRegistry};
use super::core::CliError;

/// Pins the shell's calendar date, mainly for scripted runs.
pub const TODAY_ENV: &str = "BUDGET_PULSE_TODAY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub store: TransactionStore,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub data_file: PathBuf,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let store = TransactionStore::from_config(&config, clock_from_env()?);
        Ok(Self::from_parts(mode, config_manager, config, store))
    }

    pub fn from_parts(
        mode: CliMode,
        config_manager: ConfigManager,
        config: Config,
        mut store: TransactionStore,
    ) -> Self {
        store.subscribe(|state| {
            debug!(
                entries = state.entries.len(),
                in_period = state.filtered_entries.len(),
                saved = state.kpis.amount_saved,
                "store state published"
            );
        });
        let data_file = config.data_file_or_default(config_manager.base_dir());
        Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            store,
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            data_file,
            running: true,
        }
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    /// Money presentation for the configured locale and currency.
    pub fn money_style(&self) -> MoneyStyle {
        MoneyStyle::new(&self.config.locale, &self.config.currency)
    }

    pub fn prompt(&self) -> String {
        format!("budget_pulse [{}]> ", self.store.current_state().filter.preset)
    }
}

fn clock_from_env() -> Result<Arc<dyn Clock>, CliError> {
    match env::var(TODAY_ENV) {
        Ok(raw) => {
            let date = parse_iso_date(&raw).ok_or_else(|| {
                PulseError::Config(format!("{TODAY_ENV} must be an ISO date, got `{raw}`"))
            })?;
            Ok(Arc::new(FixedClock::new(date)))
        }
        Err(_) => Ok(Arc::new(SystemClock)),
    }
}
