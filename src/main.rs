use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spendlog::cli::{
    handle_add, handle_edit, handle_limit_command, handle_list, handle_remove, handle_report,
    handle_total, AddArgs, EditArgs, FilterArgs, LimitCommands, RemoveArgs, ReportArgs,
};
use spendlog::config::SpendlogPaths;
use spendlog::store::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Command-line personal expense tracker",
    long_about = "spendlog records your day-to-day expenses, shows them filtered \
                  by day or month, and warns you when a month's spending exceeds \
                  your configured budget limit."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense
    Add(AddArgs),

    /// List expenses in the current view
    #[command(alias = "ls")]
    List(FilterArgs),

    /// Edit an expense by id
    Edit(EditArgs),

    /// Remove expenses by id or by position in the filtered view
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Show the filtered total
    Total(FilterArgs),

    /// Show the monthly category breakdown
    Report(ReportArgs),

    /// Show or set the monthly budget limit
    #[command(subcommand)]
    Limit(LimitCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = SpendlogPaths::new()?;
    let mut store = ExpenseStore::open(paths.clone())?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut store, args)?,
        Some(Commands::List(filter)) => handle_list(&mut store, filter)?,
        Some(Commands::Edit(args)) => handle_edit(&mut store, args)?,
        Some(Commands::Remove(args)) => handle_remove(&mut store, args)?,
        Some(Commands::Total(filter)) => handle_total(&mut store, filter)?,
        Some(Commands::Report(args)) => handle_report(&mut store, args)?,
        Some(Commands::Limit(cmd)) => handle_limit_command(&mut store, cmd)?,
        Some(Commands::Config) => {
            println!("spendlog Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expense file:   {}", paths.expenses_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!(
                "Monthly limit: {}{}",
                store.currency_symbol(),
                store.monthly_limit()
            );
        }
        None => {
            println!("spendlog - Command-line personal expense tracker");
            println!();
            println!("Run 'spendlog --help' for usage information.");
            println!("Run 'spendlog list' to see this month's expenses.");
        }
    }

    Ok(())
}
