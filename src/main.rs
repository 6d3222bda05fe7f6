use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{debug, error};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use storycash::cli::{
    handle_category_command, handle_export_command, handle_stats_command, handle_tips_command,
    handle_transaction_command, CategoryCommands, TransactionCommands,
};
use storycash::config::{Settings, StoryCashPaths};
use storycash::display::format_money_colored;
use storycash::models::Interval;
use storycash::services::FinanceSession;
use storycash::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "storycash",
    version,
    about = "Personal income and expense tracker",
    long_about = "StoryCash records income and expenses against categories in a local \
                  JSON ledger, reports totals over preset intervals and exports \
                  transactions as CSV."
)]
struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Show totals for a preset interval or a date range
    Stats {
        /// week, month, six-month or year
        #[arg(short, long, default_value = "week")]
        interval: Interval,
        /// Start date (YYYY-MM-DD), used together with --to
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), used together with --from
        #[arg(long)]
        to: Option<String>,
    },

    /// Export all transactions as CSV
    Export {
        /// Target directory, defaults to the exports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete all transactions and restore the default categories
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show financial tips
    Tips {
        /// Fetch a fresh list before showing it
        #[arg(long)]
        refresh: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Show ledger file information and totals
    Info,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level.to_string().to_lowercase());

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let paths = StoryCashPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut store = LedgerStore::open(paths.ledger_file());

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&mut store, &settings, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&mut store, cmd)?;
        }
        Some(Commands::Stats { interval, from, to }) => {
            handle_stats_command(&mut store, &settings, interval, from, to, Utc::now())?;
        }
        Some(Commands::Export { output }) => {
            handle_export_command(&store, &paths, output)?;
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                bail!("Refusing to reset without --yes; this deletes every transaction");
            }
            FinanceSession::new(&mut store).reset()?;
            println!("Ledger reset to default categories.");
        }
        Some(Commands::Tips { refresh }) => {
            handle_tips_command(&paths, &settings, refresh).await;
        }
        Some(Commands::Config) => {
            println!("StoryCash Configuration");
            println!("=======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Ledger file:       {}", paths.ledger_file().display());
            println!("Tips cache:        {}", paths.tips_cache_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!();
            println!("Settings:");
            println!(
                "  Tips URL:        {}",
                settings.tips_url.as_deref().unwrap_or("(none)")
            );
            println!("  Tips timeout:    {}s", settings.tips_timeout_secs);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Recent limit:    {}", settings.recent_limit);
        }
        Some(Commands::Info) => {
            let session = FinanceSession::new(&mut store);
            let totals = session.totals();
            let symbol = settings.currency_symbol.as_str();

            println!("{}", session.store().info());
            println!("  Income:       {}", totals.income.format_with_symbol(symbol));
            println!("  Expense:      {}", totals.expense.format_with_symbol(symbol));
            println!("  Balance:      {}", format_money_colored(totals.balance, symbol));
        }
        None => {
            println!("StoryCash - personal income and expense tracker");
            println!();
            println!("Run 'storycash --help' for usage information.");
        }
    }

    Ok(())
}

/// Initialize tracing; `RUST_LOG` wins over `--log-level` when set
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
