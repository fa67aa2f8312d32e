//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod alerts;
pub mod budget;
pub mod calc;
pub mod goal;
pub mod investment;
pub mod report;
pub mod transaction;

pub use alerts::handle_alerts_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use calc::{handle_calc_command, CalcCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use investment::{handle_investment_command, InvestmentCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::settings::Settings;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, UserId};
use crate::storage::Storage;

/// Everything a record command needs besides its arguments
pub struct CommandContext<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,
    pub user: &'a UserId,
    pub today: NaiveDate,
}

pub(crate) fn parse_money(input: &str) -> FintrackResult<Money> {
    Money::parse(input).map_err(|e| {
        FintrackError::Validation(format!(
            "Invalid amount: '{}'. Use a format like '50.00' or '1,250'. Error: {}",
            input, e
        ))
    })
}

pub(crate) fn parse_date(input: &str) -> FintrackResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        FintrackError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", input))
    })
}

pub(crate) fn parse_rate(input: &str) -> FintrackResult<Decimal> {
    Decimal::from_str(input.trim().trim_end_matches('%')).map_err(|_| {
        FintrackError::Validation(format!("Invalid rate: '{}'. Use a percentage like '8.5'", input))
    })
}
