//! CLI argument parsing and command dispatch

use anyhow::{bail, Context as _, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use traders::commands::{self, init::DEFAULT_FACTION, Context};
use traders::config::Settings;
use traders::ui;

/// Command-line client for the SpaceTraders API
#[derive(Parser, Debug)]
#[command(name = "traders")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding config.json and account tokens [default: ~/.spacetraders]
    #[arg(long, global = true, value_name = "DIR", env = "SPACETRADERS_HOME")]
    home: Option<PathBuf>,

    /// SpaceTraders API base URL
    #[arg(long, global = true, value_name = "URL", env = "SPACETRADERS_API_URL")]
    api_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = clap::value_parser!(log::LevelFilter)
    )]
    pub log_level: log::LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initializes a new game instance
    Init(InitArgs),
    /// Switches the account used for API calls
    Activate(ActivateArgs),
    /// Lists locally stored accounts
    Accounts,
    /// Returns information on different resources
    #[command(subcommand)]
    Get(GetCommands),
}

#[derive(Args, Debug)]
struct InitArgs {
    /// Name for the new account. Must be unique
    #[arg(long)]
    symbol: Option<String>,

    /// Starting faction
    #[arg(long, default_value = DEFAULT_FACTION)]
    faction: String,
}

#[derive(Args, Debug)]
struct ActivateArgs {
    /// Symbol of a stored account
    #[arg(long)]
    symbol: Option<String>,
}

#[derive(Subcommand, Debug)]
enum GetCommands {
    /// Gets information on your agent
    Agent,
    /// Gets information on your contracts
    Contracts,
    /// Gets information on your headquarters
    #[command(alias = "hq")]
    Headquarters,
    /// Gets information on a system (defaults to your headquarters' system)
    System {
        #[arg(long)]
        symbol: Option<String>,
    },
}

/// Log level from `--log-level`, overridden by `RUST_LOG` when set.
pub fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let settings = Settings::new(self.home, self.api_url)?;
        log::debug!(
            "data dir {}, api {}",
            settings.data_dir().display(),
            settings.api_url()
        );
        let ctx = Context::new(&settings, self.json);

        match self.command {
            Commands::Init(args) => {
                let symbol = match args.symbol {
                    Some(s) => s,
                    None if ui::is_interactive() => ui::prompt_symbol()?,
                    None => bail!("--symbol is required"),
                };
                commands::init::run(&ctx, &symbol, &args.faction)
                    .with_context(|| format!("Failed to initialize account {}", symbol))?;
            }
            Commands::Activate(args) => {
                let symbol = match args.symbol {
                    Some(s) => s,
                    None if ui::is_interactive() => {
                        let accounts = ctx.store.accounts()?;
                        if accounts.is_empty() {
                            bail!("No stored accounts. Run `traders init` first.");
                        }
                        let active = ctx.store.active_symbol().ok();
                        ui::select_account(&accounts, active.as_deref())?
                    }
                    None => bail!("--symbol is required"),
                };
                commands::activate::run(&ctx, &symbol)?;
            }
            Commands::Accounts => commands::accounts::run(&ctx)?,
            Commands::Get(get) => match get {
                GetCommands::Agent => commands::get::agent(&ctx)?,
                GetCommands::Contracts => commands::get::contracts(&ctx)?,
                GetCommands::Headquarters => commands::get::headquarters(&ctx)?,
                GetCommands::System { symbol } => {
                    commands::get::system(&ctx, symbol.as_deref())?
                }
            },
        }
        Ok(())
    }
}
