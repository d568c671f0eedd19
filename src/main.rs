use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_budget_command, handle_delete_command, handle_export_command,
    handle_list_command, handle_summary_command, AddArgs, BudgetArgs, DeleteArgs, ExportArgs,
    ListArgs, SummaryArgs,
};
use expense_tracker::config::paths::DATA_DIR_ENV;
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::export::ExportService;
use expense_tracker::services::{BudgetService, ExpenseService};
use expense_tracker::storage::{BudgetStore, JsonFileRepository};

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "A simple tool to track your expenses",
    long_about = "Expense Tracker records expenses in a JSON file, summarizes them \
                  overall or per month, checks monthly budgets and exports to CSV."
)]
struct Cli {
    /// Directory holding expenses.json and config.json (defaults to ./data)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace. Overridden by RUST_LOG.
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(AddArgs),

    /// List expenses
    List(ListArgs),

    /// Delete an expense
    Delete(DeleteArgs),

    /// Show a summary of expenses
    Summary(SummaryArgs),

    /// Set a budget for a month and check spending against it
    Budget(BudgetArgs),

    /// Export expenses to a CSV file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = TrackerPaths::resolve(cli.data_dir)?;
    debug!("Using data directory {}", paths.base_dir().display());
    let settings = Settings::load_or_default(&paths)?;

    let Some(command) = cli.command else {
        println!("Expense Tracker - A simple tool to track your expenses");
        println!();
        println!("Run 'expense-tracker help' for usage information.");
        return Ok(());
    };

    if let Commands::Config = command {
        println!("Expense Tracker Configuration");
        println!("=============================");
        println!("Data directory: {}", paths.base_dir().display());
        println!("Expenses file:  {}", paths.expenses_file().display());
        println!("Settings file:  {}", paths.settings_file().display());
        println!();
        println!("Settings:");
        println!("  Schema version:      {}", settings.schema_version);
        println!("  Date format:         {}", settings.date_format);
        println!("  Default export file: {}", settings.default_export_file);
        return Ok(());
    }

    paths.ensure_directories()?;
    if !paths.settings_file().exists() {
        settings.save(&paths)?;
    }

    let repo = JsonFileRepository::new(paths.expenses_file())?;
    debug!("Using expense file {}", repo.path().display());
    let expenses = ExpenseService::new(repo);
    let budgets = BudgetService::new(&expenses, BudgetStore::new());
    let exporter = ExportService::new(&expenses);

    match command {
        Commands::Add(args) => handle_add_command(&expenses, args)?,
        Commands::List(args) => handle_list_command(&expenses, &settings, args)?,
        Commands::Delete(args) => handle_delete_command(&expenses, args)?,
        Commands::Summary(args) => handle_summary_command(&expenses, &budgets, args)?,
        Commands::Budget(args) => handle_budget_command(&budgets, args)?,
        Commands::Export(args) => handle_export_command(&exporter, &settings, args)?,
        Commands::Config => {}
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        // RUST_LOG does not exist; use the requested level for this crate only.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
