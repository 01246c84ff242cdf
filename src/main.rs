use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use won2real::core::config::RateMode;
use won2real::core::log::init_logging;
use won2real::core::unit::UnitMultiplier;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Where the exchange rate comes from, overrides the configuration
    #[arg(short, long, global = true, value_enum)]
    mode: Option<Mode>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Use the fixed rate
    Fixed,
    /// Fetch the current rate once at startup
    Live,
}

impl From<Mode> for RateMode {
    fn from(mode: Mode) -> RateMode {
        match mode {
            Mode::Fixed => RateMode::Fixed,
            Mode::Live => RateMode::Live,
        }
    }
}

impl From<Commands> for won2real::AppCommand {
    fn from(cmd: Commands) -> won2real::AppCommand {
        match cmd {
            Commands::Convert { amount, unit } => won2real::AppCommand::Convert { amount, unit },
            Commands::Table { amount } => won2real::AppCommand::Table { amount },
            Commands::Interactive { unit } => won2real::AppCommand::Interactive { unit },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount of Won to Real
    Convert {
        /// Amount in Won, read in the selected unit
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Unit of the amount: units, thousands, millions or billions
        #[arg(short, long)]
        unit: Option<UnitMultiplier>,
    },
    /// Show an amount converted under every unit
    Table {
        /// Amount in Won
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Convert amounts typed line by line (default)
    Interactive {
        /// Initial unit: units, thousands, millions or billions
        #[arg(short, long)]
        unit: Option<UnitMultiplier>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mode = cli.mode.map(RateMode::from);
    let result = match cli.command {
        Some(Commands::Setup) => won2real::cli::setup::setup(),
        Some(cmd) => won2real::run_command(cmd.into(), cli.config_path.as_deref(), mode).await,
        None => {
            let cmd = won2real::AppCommand::Interactive { unit: None };
            won2real::run_command(cmd, cli.config_path.as_deref(), mode).await
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
