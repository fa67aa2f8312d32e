//! Financial Summary Report
//!
//! Income, expenses, balance, month-by-month totals and the expense breakdown
//! by category over a selectable date range.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use super::aggregation::{by_category, by_month, total_by_kind};
use crate::display::report::{format_bar, format_percentage, separator};
use crate::models::{BudgetPeriod, FinanceSnapshot, Money, Transaction, TransactionKind};

/// Date range selector for the summary report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportRange {
    #[default]
    ThisMonth,
    Last3Months,
    Last6Months,
    ThisYear,
    All,
}

impl ReportRange {
    /// First date included in the range, or `None` for all time
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::ThisMonth => Some(BudgetPeriod::from_date(today).start_date()),
            Self::Last3Months => today.checked_sub_months(Months::new(3)),
            Self::Last6Months => today.checked_sub_months(Months::new(6)),
            Self::ThisYear => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Self::All => None,
        }
    }
}

impl fmt::Display for ReportRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ThisMonth => "this-month",
            Self::Last3Months => "last-3-months",
            Self::Last6Months => "last-6-months",
            Self::ThisYear => "this-year",
            Self::All => "all",
        };
        f.write_str(s)
    }
}

impl FromStr for ReportRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "this-month" | "month" => Ok(Self::ThisMonth),
            "last-3-months" | "3m" => Ok(Self::Last3Months),
            "last-6-months" | "6m" => Ok(Self::Last6Months),
            "this-year" | "year" => Ok(Self::ThisYear),
            "all" => Ok(Self::All),
            other => Err(format!(
                "Unknown range '{}' (expected this-month, last-3-months, last-6-months, this-year or all)",
                other
            )),
        }
    }
}

/// One month of the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRow {
    /// "YYYY-MM"
    pub month: String,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

/// One category's share of expenses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: Money,
    /// Share of total expenses in the range
    pub percentage: f64,
}

/// Financial summary over a date range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub range: ReportRange,
    pub start_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub total_income: Money,
    pub total_expenses: Money,
    pub net_balance: Money,
    pub transaction_count: usize,
    /// Chronological, only months with transactions
    pub monthly: Vec<MonthlyRow>,
    /// Largest first
    pub expense_breakdown: Vec<CategoryShare>,
    /// Sum of the investments' estimated current values
    pub total_investments: Money,
}

impl FinancialSummary {
    /// Generate the summary from a snapshot
    pub fn generate(
        snapshot: &FinanceSnapshot,
        range: ReportRange,
        category: Option<&str>,
        today: NaiveDate,
    ) -> Self {
        let start_date = range.start_date(today);

        let transactions: Vec<Transaction> = snapshot
            .transactions
            .iter()
            .filter(|t| start_date.map_or(true, |start| t.date >= start))
            .filter(|t| category.map_or(true, |c| t.category == c))
            .cloned()
            .collect();

        let total_income = total_by_kind(&transactions, TransactionKind::Income);
        let total_expenses = total_by_kind(&transactions, TransactionKind::Expense);

        let monthly = by_month(&transactions)
            .into_iter()
            .map(|(month, totals)| MonthlyRow {
                month,
                income: totals.income,
                expense: totals.expense,
                balance: totals.balance(),
            })
            .collect();

        let mut expense_breakdown: Vec<CategoryShare> =
            by_category(&transactions, TransactionKind::Expense)
                .into_iter()
                .map(|(category, amount)| CategoryShare {
                    percentage: amount
                        .percent_of(total_expenses)
                        .and_then(|pct| pct.to_f64())
                        .unwrap_or_default(),
                    category,
                    amount,
                })
                .collect();
        // Ties keep alphabetical order from the map
        expense_breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));

        let total_investments = snapshot.investments.iter().map(|i| i.current_value).sum();

        Self {
            range,
            start_date,
            category: category.map(str::to_string),
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            transaction_count: transactions.len(),
            monthly,
            expense_breakdown,
            total_investments,
        }
    }

    /// The last `n` months that have transactions, oldest first
    pub fn recent_months(&self, n: usize) -> &[MonthlyRow] {
        let skip = self.monthly.len().saturating_sub(n);
        &self.monthly[skip..]
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        let scope = match self.start_date {
            Some(start) => format!("since {}", start),
            None => "all time".to_string(),
        };
        output.push_str(&format!("Financial Summary ({}, {})\n", self.range, scope));
        if let Some(category) = &self.category {
            output.push_str(&format!("Category: {}\n", category));
        }
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Total Income:",
            self.total_income.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Total Expenses:",
            self.total_expenses.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Balance:",
            self.net_balance.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Investments:",
            self.total_investments.format_with_symbol(currency)
        ));
        output.push_str(&format!("{:<20} {:>20}\n\n", "Transactions:", self.transaction_count));

        if self.monthly.is_empty() {
            output.push_str("No transactions in this range.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<10} {:>15} {:>15} {:>15}\n",
            "Month", "Income", "Expenses", "Balance"
        ));
        output.push_str(&separator(60));
        output.push('\n');
        for row in &self.monthly {
            output.push_str(&format!(
                "{:<10} {:>15} {:>15} {:>15}\n",
                row.month, row.income, row.expense, row.balance
            ));
        }

        if !self.expense_breakdown.is_empty() {
            output.push_str("\nExpenses by Category\n");
            output.push_str(&separator(60));
            output.push('\n');
            for share in &self.expense_breakdown {
                output.push_str(&format!(
                    "{:<20} {:>12} {:>7} {}\n",
                    share.category,
                    share.amount,
                    format_percentage(share.percentage),
                    format_bar(share.percentage, 100.0, 15)
                ));
            }
        }

        output
    }
}
