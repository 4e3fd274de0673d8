use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sitetrack_cli::CliResult;
use sitetrack_cli::commands::Command;
use sitetrack_cli::config::{ITEMS_PATH_ENV, TODAY_ENV, parse_today, resolve_items_path};
use sitetrack_cli::loader::load_items;

/// SiteTrack - Gantt timelines for construction schedule items
#[derive(Parser)]
#[command(name = "stk")]
#[command(version = "0.1.0")]
#[command(about = "Gantt timelines for construction schedule items", long_about = None)]
struct Args {
    /// Path to the items JSON file (can also be set via STK_ITEMS_PATH env var)
    #[arg(long, global = true)]
    items: Option<PathBuf>,

    /// Date to treat as today, YYYY-MM-DD (defaults to the local date)
    #[arg(long, global = true, env = TODAY_ENV, value_parser = parse_today)]
    today: Option<NaiveDate>,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Command,
}

/// Initialize logging from the RUST_LOG environment variable
///
/// Examples:
/// - `RUST_LOG=trace` - show all trace logs
/// - `RUST_LOG=debug` - show debug and above
/// - `RUST_LOG=sitetrack_timeline=debug` - engine debug logs only
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run_app() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Main application logic - separated for testability
fn run_app() -> CliResult<()> {
    let args = Args::parse();
    let output = run_with_args(&args)?;
    println!("{}", output);
    Ok(())
}

/// Run the application with the given arguments and return what to print
fn run_with_args(args: &Args) -> CliResult<String> {
    // Determine items path using priority: CLI arg > env var > default
    let items_path = resolve_items_path(args.items.clone());
    debug!(
        "Items path: {} (override with --items or {})",
        items_path.display(),
        ITEMS_PATH_ENV
    );

    let items = load_items(&items_path)?;
    let today = args.today.unwrap_or_else(sitetrack_timeline::today);
    debug!("Using {} as today", today);

    args.command.execute(&items, today)
}
