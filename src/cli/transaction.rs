//! Transaction CLI commands
//!
//! Implements CLI commands for recording and listing income and expenses.

use clap::Subcommand;

use super::{parse_date, parse_money, CommandContext};
use crate::display::transaction::format_transaction_list;
use crate::error::{FintrackError, FintrackResult};
use crate::models::TransactionKind;
use crate::services::{NewTransaction, TransactionFilter, TransactionService};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record income or an expense
    Add {
        /// income or expense
        kind: String,
        /// Amount, always positive (e.g., "50.00")
        amount: String,
        /// Category name
        category: String,
        /// Free-text description
        #[arg(short = 'D', long)]
        description: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only income or only expenses
        #[arg(short, long)]
        kind: Option<String>,
        /// Filter by category name
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn parse_kind(input: &str) -> FintrackResult<TransactionKind> {
    input
        .parse()
        .map_err(|e: crate::models::TransactionValidationError| FintrackError::Validation(e.to_string()))
}

/// Handle a transaction command
pub fn handle_transaction_command(ctx: &CommandContext<'_>, cmd: TransactionCommands) -> FintrackResult<()> {
    let service = TransactionService::new(ctx.storage);

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let input = NewTransaction {
                kind: parse_kind(&kind)?,
                amount: parse_money(&amount)?,
                category,
                description: description.unwrap_or_default(),
                date: match date {
                    Some(d) => parse_date(&d)?,
                    None => ctx.today,
                },
            };

            let recorded = service.add(ctx.user, input)?;
            let txn = &recorded.transaction;

            println!("Recorded {}:", txn.kind);
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date.format(&ctx.settings.date_format));
            println!("  Amount:   {}", txn.amount.format_with_symbol(&ctx.settings.currency_symbol));
            println!("  Category: {}", txn.category);
            if !txn.description.is_empty() {
                println!("  Note:     {}", txn.description);
            }

            if let Some(alert) = &recorded.budget_alert {
                println!();
                println!("Warning: {}", alert);
            }
        }

        TransactionCommands::List { kind, category, limit } => {
            let mut filter = TransactionFilter::default().limit(limit);
            if let Some(kind) = kind {
                filter = filter.kind(parse_kind(&kind)?);
            }
            if let Some(category) = category {
                filter = filter.category(category);
            }

            let transactions = service.list(ctx.user, &filter)?;
            print!("{}", format_transaction_list(&transactions, &ctx.settings.date_format));
            println!("\nShowing {} transactions", transactions.len());
        }
    }

    Ok(())
}
