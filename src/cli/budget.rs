//! Budget CLI commands

use clap::Subcommand;

use super::{parse_money, CommandContext};
use crate::display::budget::format_budget_statuses;
use crate::error::{FintrackError, FintrackResult};
use crate::models::BudgetPeriod;
use crate::services::BudgetService;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly limit for a category
    Add {
        /// Category name
        category: String,
        /// Spending limit for the month
        limit: String,
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Show spending against each budget for a month
    Status {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
}

fn resolve_period(ctx: &CommandContext<'_>, period: Option<String>) -> FintrackResult<BudgetPeriod> {
    match period {
        Some(p) => BudgetPeriod::parse(&p).map_err(|e| FintrackError::Validation(e.to_string())),
        None => Ok(BudgetPeriod::from_date(ctx.today)),
    }
}

/// Handle a budget command
pub fn handle_budget_command(ctx: &CommandContext<'_>, cmd: BudgetCommands) -> FintrackResult<()> {
    let service = BudgetService::new(ctx.storage);

    match cmd {
        BudgetCommands::Add { category, limit, period } => {
            let period = resolve_period(ctx, period)?;
            let limit = parse_money(&limit)?;
            let budget = service.create(ctx.user, &category, limit, period)?;

            println!("Created budget:");
            println!("  ID:       {}", budget.id);
            println!("  Category: {}", budget.category);
            println!("  Period:   {}", budget.period);
            println!("  Limit:    {}", budget.limit.format_with_symbol(&ctx.settings.currency_symbol));
        }

        BudgetCommands::Status { period } => {
            let period = resolve_period(ctx, period)?;
            service.refresh_spent(ctx.user, period)?;
            let evaluations = service.statuses(ctx.user, period)?;
            print!("{}", format_budget_statuses(period, &evaluations));
        }
    }

    Ok(())
}
