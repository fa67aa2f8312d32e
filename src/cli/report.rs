//! Report CLI commands

use clap::Subcommand;

use super::CommandContext;
use crate::error::{FintrackError, FintrackResult};
use crate::reports::{FinancialSummary, ReportRange};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expenses and category breakdown over a range
    Summary {
        /// this-month, last-3-months, last-6-months, this-year or all
        #[arg(short, long, default_value = "this-month")]
        range: String,
        /// Only include one category
        #[arg(short = 'C', long)]
        category: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(ctx: &CommandContext<'_>, cmd: ReportCommands) -> FintrackResult<()> {
    match cmd {
        ReportCommands::Summary { range, category } => {
            let range: ReportRange = range.parse().map_err(FintrackError::Validation)?;
            let snapshot = ctx.storage.snapshot(ctx.user)?;
            let summary = FinancialSummary::generate(&snapshot, range, category.as_deref(), ctx.today);
            print!("{}", summary.format_terminal(&ctx.settings.currency_symbol));
        }
    }

    Ok(())
}
