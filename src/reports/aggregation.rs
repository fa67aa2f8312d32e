//! Transaction aggregation
//!
//! Stateless grouping and totalling over a user's transaction list. Input
//! order never affects the output, and empty input yields zero or empty
//! results.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{BudgetPeriod, Money, Transaction, TransactionKind};

/// Income and expense sums for one month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyTotals {
    pub income: Money,
    pub expense: Money,
}

impl MonthlyTotals {
    /// income − expense
    pub fn balance(&self) -> Money {
        self.income - self.expense
    }
}

/// Sum of amounts for one transaction kind
pub fn total_by_kind(transactions: &[Transaction], kind: TransactionKind) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.amount)
        .sum()
}

/// Total income minus total expenses
pub fn net_balance(transactions: &[Transaction]) -> Money {
    total_by_kind(transactions, TransactionKind::Income)
        - total_by_kind(transactions, TransactionKind::Expense)
}

/// Group by "YYYY-MM"
///
/// Only months with at least one transaction get a key. The zero-padded keys
/// make the map iterate in chronological order.
pub fn by_month(transactions: &[Transaction]) -> BTreeMap<String, MonthlyTotals> {
    let mut months: BTreeMap<String, MonthlyTotals> = BTreeMap::new();

    for txn in transactions {
        let entry = months.entry(BudgetPeriod::key_for(txn.date)).or_default();
        match txn.kind {
            TransactionKind::Income => entry.income += txn.amount,
            TransactionKind::Expense => entry.expense += txn.amount,
        }
    }

    months
}

/// Sum amounts per category for one kind
pub fn by_category(transactions: &[Transaction], kind: TransactionKind) -> BTreeMap<String, Money> {
    let mut categories: BTreeMap<String, Money> = BTreeMap::new();

    for txn in transactions.iter().filter(|t| t.kind == kind) {
        *categories.entry(txn.category.clone()).or_default() += txn.amount;
    }

    categories
}

/// Transactions dated in [start, end)
pub fn in_window(
    transactions: &[Transaction],
    start_inclusive: NaiveDate,
    end_exclusive: NaiveDate,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| t.date >= start_inclusive && t.date < end_exclusive)
        .cloned()
        .collect()
}

/// Transactions dated within a calendar month
pub fn in_period(transactions: &[Transaction], period: BudgetPeriod) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| period.contains(t.date))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(kind: TransactionKind, amount: Money, category: &str, on: NaiveDate) -> Transaction {
        Transaction::new(UserId::new("user-1").unwrap(), kind, amount, category, on)
    }

    fn sample() -> Vec<Transaction> {
        vec![
            txn(TransactionKind::Income, Money::from_units(3000), "Salary", date(2024, 1, 5)),
            txn(TransactionKind::Expense, Money::new(dec!(120.50)), "Food", date(2024, 1, 9)),
            txn(TransactionKind::Expense, Money::new(dec!(79.50)), "Food", date(2024, 3, 2)),
            txn(TransactionKind::Expense, Money::from_units(40), "Transport", date(2024, 3, 20)),
            txn(TransactionKind::Income, Money::from_units(500), "Freelance", date(2024, 3, 28)),
        ]
    }

    #[test]
    fn test_totals() {
        let txns = sample();
        assert_eq!(total_by_kind(&txns, TransactionKind::Income), Money::from_units(3500));
        assert_eq!(total_by_kind(&txns, TransactionKind::Expense), Money::from_units(240));
        assert_eq!(net_balance(&txns), Money::from_units(3260));
    }

    #[test]
    fn test_by_month_skips_empty_months() {
        let months = by_month(&sample());
        let keys: Vec<_> = months.keys().cloned().collect();
        assert_eq!(keys, vec!["2024-01".to_string(), "2024-03".to_string()]);

        let march = months["2024-03"];
        assert_eq!(march.income, Money::from_units(500));
        assert_eq!(march.expense, Money::new(dec!(119.50)));
        assert_eq!(march.balance(), Money::new(dec!(380.50)));
    }

    #[test]
    fn test_by_category() {
        let expenses = by_category(&sample(), TransactionKind::Expense);
        assert_eq!(expenses.len(), 2);
        assert_eq!(expenses["Food"], Money::from_units(200));
        assert_eq!(expenses["Transport"], Money::from_units(40));
        assert!(!expenses.contains_key("Salary"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(total_by_kind(&[], TransactionKind::Income), Money::zero());
        assert_eq!(net_balance(&[]), Money::zero());
        assert!(by_month(&[]).is_empty());
        assert!(by_category(&[], TransactionKind::Expense).is_empty());
    }

    #[test]
    fn test_huge_totals_saturate() {
        let huge = Money::new(dec!(50000000000000000000000000000));
        let txns = vec![
            txn(TransactionKind::Expense, huge, "Food", date(2024, 1, 9)),
            txn(TransactionKind::Expense, huge, "Food", date(2024, 1, 10)),
        ];

        let total = total_by_kind(&txns, TransactionKind::Expense);
        assert_eq!(total, Money::new(rust_decimal::Decimal::MAX));
        assert_eq!(by_category(&txns, TransactionKind::Expense)["Food"], total);
        assert_eq!(by_month(&txns)["2024-01"].expense, total);
        assert!(net_balance(&txns).is_negative());
    }

    #[test]
    fn test_window_bounds() {
        let txns = sample();
        let window = in_window(&txns, date(2024, 1, 9), date(2024, 3, 20));
        assert_eq!(window.len(), 2);

        let march = in_period(&txns, BudgetPeriod::new(2024, 3).unwrap());
        assert_eq!(march.len(), 3);
    }

    #[test]
    fn test_order_independent_and_idempotent() {
        let txns = sample();
        let mut reversed = txns.clone();
        reversed.reverse();

        assert_eq!(by_month(&txns), by_month(&reversed));
        assert_eq!(
            by_category(&txns, TransactionKind::Expense),
            by_category(&reversed, TransactionKind::Expense)
        );

        let first = serde_json::to_string(&by_month(&txns)).unwrap();
        let second = serde_json::to_string(&by_month(&txns)).unwrap();
        assert_eq!(first, second);
    }
}
