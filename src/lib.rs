pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::{AppConfig, RateMode};
use crate::core::unit::UnitMultiplier;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    /// Convert one amount, in `unit` or the configured default unit
    Convert {
        amount: String,
        unit: Option<UnitMultiplier>,
    },
    /// Convert one amount under every unit
    Table { amount: String },
    /// Read amounts and unit changes from standard input
    Interactive { unit: Option<UnitMultiplier> },
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    mode: Option<RateMode>,
) -> Result<()> {
    info!("won2real starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!(mode = ?config.rate.mode, unit = %config.default_unit, "Loaded config");

    let mode = mode.unwrap_or(config.rate.mode);
    let source = providers::build_rate_source(&config, mode);

    match command {
        AppCommand::Convert { amount, unit } => {
            let unit = unit.unwrap_or(config.default_unit);
            cli::convert::run(source.as_ref(), &amount, unit).await;
        }
        AppCommand::Table { amount } => {
            cli::table::run(source.as_ref(), &amount).await;
        }
        AppCommand::Interactive { unit } => {
            let unit = unit.unwrap_or(config.default_unit);
            cli::interactive::run(source.as_ref(), unit).await?;
        }
    }
    Ok(())
}
