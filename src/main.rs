use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use paycycle::cli::{
    handle_budget_command, handle_category_command, handle_expense_command, handle_export_command,
    handle_import_command, handle_report_command, handle_stats_command, BudgetCommands,
    CategoryCommands, ExpenseCommands, ExportCommands, ReportCommands, StatsArgs,
};
use paycycle::config::{paths::PaycyclePaths, settings::Settings};
use paycycle::engine::{Clock, FixedClock, SystemClock};
use paycycle::logging::init_tracing;
use paycycle::storage::{BudgetStore, JsonStorage};

#[derive(Parser)]
#[command(
    name = "paycycle",
    version,
    about = "Payday-aligned monthly budgeting with weekly spending limits",
    long_about = "paycycle splits a monthly budget into a pay cycle that starts on a \
                  chosen day of the month (moved back to the previous business day when \
                  it lands on a weekend or holiday), divides the cycle into weeks and \
                  tracks how much of each week's share has been spent."
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, env = "PAYCYCLE_TODAY", hide = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Budget amount and cycle start day
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Current cycle statistics and weekly breakdown
    Stats(StatsArgs),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to CSV, JSON or YAML
    #[command(subcommand)]
    Export(ExportCommands),

    /// Restore data from a JSON export, replacing everything stored
    Import {
        /// Path to a file written by 'paycycle export expenses --format json'
        file: PathBuf,
        /// Confirm the import
        #[arg(long)]
        yes: bool,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Delete the budget and all expenses, and restore the default categories
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    };
    let today = clock.today();

    // Initialize paths and settings
    let paths = PaycyclePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = JsonStorage::open(paths.clone())?;

    match cli.command {
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, cmd)?;
        }
        Some(Commands::Stats(args)) => {
            handle_stats_command(&storage, &settings, today, args)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, today, cmd)?;
        }
        Some(Commands::Import { file, yes }) => {
            handle_import_command(&storage, &file, yes)?;
        }
        Some(Commands::Init) => {
            println!("Initializing paycycle at: {}", paths.base_dir().display());
            if paycycle::storage::init::initialize_storage(&paths)? {
                println!("Initialization complete!");
                println!();
                println!("Default categories have been created:");
                println!("  Food, Transport, Shopping, Culture, Medical, Other");
            } else {
                println!("Already initialized, nothing to do.");
            }
            println!();
            println!("Run 'paycycle budget set <amount> --start-day <day>' to set a budget.");
        }
        Some(Commands::Config) => {
            println!("paycycle Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Holiday region:   {}", settings.region);
            println!("  Extra holidays:   {}", settings.extra_holidays.len());
            println!("  Week policy:      {}", settings.week_policy);
            println!("  Max lookback:     {} days", settings.max_lookback_days);
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Today:            {}", settings.format_date(today));
        }
        Some(Commands::Reset { yes }) => {
            if !yes {
                println!("This deletes the budget and every expense.");
                println!("Run 'paycycle reset --yes' to confirm.");
                return Ok(());
            }
            storage.clear_all()?;
            println!("All data cleared. Default categories restored.");
        }
        None => {
            println!("paycycle - payday-aligned budgeting");
            println!();
            println!("Run 'paycycle --help' for usage information.");
            println!("Run 'paycycle stats' to see the current cycle.");
        }
    }

    Ok(())
}
