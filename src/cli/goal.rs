//! Goal CLI commands

use clap::Subcommand;

use super::{parse_date, parse_money, CommandContext};
use crate::display::goal::format_goal_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{GoalCategory, Money};
use crate::services::{GoalService, NewGoal};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a financial goal
    Add {
        /// Goal title
        title: String,
        /// Target amount
        target: String,
        /// Target date (YYYY-MM-DD)
        target_date: String,
        /// Amount already saved
        #[arg(short, long)]
        current: Option<String>,
        /// savings, investment, debt-payment, emergency-fund or other
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Free-text description
        #[arg(short = 'D', long)]
        description: Option<String>,
    },
    /// Add money towards a goal
    Contribute {
        /// Goal ID
        id: String,
        /// Amount to add
        amount: String,
    },
    /// List goals with progress
    List,
}

/// Handle a goal command
pub fn handle_goal_command(ctx: &CommandContext<'_>, cmd: GoalCommands) -> FintrackResult<()> {
    let service = GoalService::new(ctx.storage);
    let currency = &ctx.settings.currency_symbol;

    match cmd {
        GoalCommands::Add {
            title,
            target,
            target_date,
            current,
            category,
            description,
        } => {
            let category = match category {
                Some(c) => c
                    .parse::<GoalCategory>()
                    .map_err(|e| FintrackError::Validation(e.to_string()))?,
                None => GoalCategory::default(),
            };

            let input = NewGoal {
                title,
                target_amount: parse_money(&target)?,
                current_amount: match current {
                    Some(c) => parse_money(&c)?,
                    None => Money::zero(),
                },
                target_date: parse_date(&target_date)?,
                category,
                description: description.unwrap_or_default(),
            };

            let goal = service.create(ctx.user, input)?;

            println!("Created goal:");
            println!("  ID:       {}", goal.id);
            println!("  Title:    {}", goal.title);
            println!("  Category: {}", goal.category);
            println!("  Target:   {}", goal.target_amount.format_with_symbol(currency));
            println!("  Saved:    {}", goal.current_amount.format_with_symbol(currency));
            println!("  Due:      {}", goal.target_date.format(&ctx.settings.date_format));
        }

        GoalCommands::Contribute { id, amount } => {
            let amount = parse_money(&amount)?;
            let goal = service.find(ctx.user, &id)?;
            let goal = service.contribute(ctx.user, goal.id, amount)?;

            println!(
                "{}: {} of {} ({:.0}%)",
                goal.title,
                goal.current_amount.format_with_symbol(currency),
                goal.target_amount.format_with_symbol(currency),
                goal.progress_percentage()
            );
            if goal.is_complete() {
                println!("Goal reached!");
            }
        }

        GoalCommands::List => {
            let goals = service.list(ctx.user, ctx.today)?;
            print!("{}", format_goal_list(&goals));
        }
    }

    Ok(())
}
