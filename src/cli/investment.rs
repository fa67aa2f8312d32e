//! Investment CLI commands

use clap::Subcommand;

use super::{parse_date, parse_money, parse_rate, CommandContext};
use crate::error::FintrackResult;
use crate::services::InvestmentService;

/// Investment subcommands
#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// Record an investment
    Add {
        /// Kind of investment (e.g., "Bonds", "Stocks")
        kind: String,
        /// Amount invested
        amount: String,
        /// Expected annual return in percent
        rate: String,
        /// Date invested (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show holdings and portfolio totals
    List,
}

/// Handle an investment command
pub fn handle_investment_command(ctx: &CommandContext<'_>, cmd: InvestmentCommands) -> FintrackResult<()> {
    let service = InvestmentService::new(ctx.storage);
    let currency = &ctx.settings.currency_symbol;

    match cmd {
        InvestmentCommands::Add { kind, amount, rate, date } => {
            let principal = parse_money(&amount)?;
            let rate = parse_rate(&rate)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => ctx.today,
            };

            let investment = service.add(ctx.user, &kind, principal, rate, date)?;

            println!("Recorded investment:");
            println!("  ID:            {}", investment.id);
            println!("  Kind:          {}", investment.kind);
            println!("  Invested:      {}", investment.principal.format_with_symbol(currency));
            println!("  Annual return: {}%", investment.annual_return_rate);
            println!("  Est. value:    {}", investment.current_value.format_with_symbol(currency));
        }

        InvestmentCommands::List => {
            let report = service.portfolio(ctx.user)?;
            print!("{}", report.format_terminal(currency));
        }
    }

    Ok(())
}
