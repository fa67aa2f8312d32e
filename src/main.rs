use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_alerts_command, handle_budget_command, handle_calc_command, handle_goal_command,
    handle_investment_command, handle_report_command, handle_transaction_command, CommandContext,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings, settings::USER_ENV};
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracking from the terminal",
    long_about = "fintrack records income, expenses, budgets, investments and goals, \
                  derives alerts from them, and includes loan, investment and \
                  savings calculators."
)]
struct Cli {
    /// User whose records to work with (falls back to FINTRACK_USER, then config)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(fintrack::cli::TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(fintrack::cli::BudgetCommands),

    /// Investment management commands
    #[command(subcommand, alias = "inv")]
    Investment(fintrack::cli::InvestmentCommands),

    /// Financial goal commands
    #[command(subcommand)]
    Goal(fintrack::cli::GoalCommands),

    /// Loan, investment and savings calculators
    #[command(subcommand)]
    Calc(fintrack::cli::CalcCommands),

    /// Reports
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),

    /// Show budget, spending, goal and income alerts
    Alerts,

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FintrackPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let Some(command) = cli.command else {
        println!("fintrack - personal finance tracking");
        println!();
        println!("Run 'fintrack --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Init => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            let storage = Storage::new(paths.clone())?;
            storage.save_all()?;
            if let Some(user) = cli.user.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
                settings.user_id = Some(user.to_string());
            }
            settings.save(&paths)?;
            println!("Initialization complete!");
            if let Some(user) = &settings.user_id {
                println!("Default user: {}", user);
            }
        }
        Commands::Config => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency:     {}", settings.currency_symbol);
            println!("  Date format:  {}", settings.date_format);
            println!(
                "  Default user: {}",
                settings.user_id.as_deref().unwrap_or("(none)")
            );
        }
        Commands::Calc(cmd) => handle_calc_command(&settings, cmd)?,
        record_command => {
            let env_user = std::env::var(USER_ENV).ok();
            let user = settings.resolve_user(cli.user.as_deref(), env_user.as_deref())?;

            let mut storage = Storage::new(paths)?;
            storage.load_all()?;

            let ctx = CommandContext {
                storage: &storage,
                settings: &settings,
                user: &user,
                today,
            };
            run_record_command(&ctx, record_command)?;
        }
    }

    Ok(())
}

/// Commands that read or write a user's records
fn run_record_command(ctx: &CommandContext<'_>, command: Commands) -> Result<()> {
    match command {
        Commands::Transaction(cmd) => handle_transaction_command(ctx, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(ctx, cmd)?,
        Commands::Investment(cmd) => handle_investment_command(ctx, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(ctx, cmd)?,
        Commands::Report(cmd) => handle_report_command(ctx, cmd)?,
        Commands::Alerts => handle_alerts_command(ctx)?,
        Commands::Init | Commands::Config | Commands::Calc(_) => {}
    }
    Ok(())
}
