use anyhow::Result;
use clap::{Parser, Subcommand};

use finsight::cli::{
    handle_budget_command, handle_export_command, handle_profile_command, handle_report_command,
    handle_tax_command, handle_transaction_command, BudgetCommands, ExportArgs, ProfileCommands,
    TaxArgs, TransactionCommands,
};
use finsight::config::{FinsightPaths, Settings};
use finsight::models::REFERENCE_CATEGORIES;
use finsight::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finsight",
    version,
    about = "Personal finance assistant for the terminal",
    long_about = "finsight keeps a transaction ledger, tracks monthly budgets, \
                  estimates income tax, and suggests investments based on your \
                  savings rate and risk tolerance. All data lives in local \
                  JSON files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record and list transactions
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Set budgets and check spending against them
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Manage the investment profile
    #[command(subcommand)]
    Profile(ProfileCommands),

    /// Generate the monthly financial report
    Report {
        /// Month to report on (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Estimate income tax
    Tax(TaxArgs),

    /// Export data to a file
    Export(ExportArgs),

    /// List the reference spending categories
    Categories,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinsightPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Profile(cmd)) => {
            handle_profile_command(&storage, cmd)?;
        }
        Some(Commands::Report { period }) => {
            handle_report_command(&storage, &settings, period)?;
        }
        Some(Commands::Tax(args)) => {
            handle_tax_command(&storage, args)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Categories) => {
            println!("Reference Categories");
            println!("====================");
            for category in REFERENCE_CATEGORIES {
                if category.deductible {
                    println!("  {} (deductible)", category.name);
                } else {
                    println!("  {}", category.name);
                }
            }
            println!();
            println!("Any non-empty category name is accepted; this list is advisory.");
            println!("Spending in deductible categories feeds 'finsight tax' itemization hints.");
        }
        Some(Commands::Config) => {
            println!("finsight Configuration");
            println!("======================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Use color:       {}", settings.use_color);
            println!("  List limit:      {}", settings.transaction_list_limit);
        }
        None => {
            println!("finsight - Personal finance assistant for the terminal");
            println!();
            println!("Run 'finsight --help' for usage information.");
            println!("Run 'finsight transaction add <AMOUNT> <CATEGORY>' to record spending.");
        }
    }

    Ok(())
}
