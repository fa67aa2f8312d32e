//! Transaction service
//!
//! Records income and expenses. Recording an expense also checks whether it
//! pushed that month's category budget over its limit.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::alerts::check_expense_against_budget;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Alert, Money, Transaction, TransactionKind, UserId};
use crate::storage::Storage;

/// Filter options for listing transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    /// Inclusive
    pub from: Option<NaiveDate>,
    /// Inclusive
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn matches(&self, txn: &Transaction) -> bool {
        self.kind.map_or(true, |k| txn.kind == k)
            && self
                .category
                .as_deref()
                .map_or(true, |c| txn.category.eq_ignore_ascii_case(c))
            && self.from.map_or(true, |from| txn.date >= from)
            && self.to.map_or(true, |to| txn.date <= to)
    }
}

/// Input for a new transaction
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Money,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// A recorded transaction and the budget alert it raised, if any
#[derive(Debug, Clone)]
pub struct RecordedTransaction {
    pub transaction: Transaction,
    pub budget_alert: Option<Alert>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a transaction
    pub fn add(&self, user: &UserId, input: NewTransaction) -> FintrackResult<RecordedTransaction> {
        let txn = Transaction::new(
            user.clone(),
            input.kind,
            input.amount,
            input.category.trim(),
            input.date,
        )
        .with_description(input.description.trim());

        if let Err(e) = txn.validate() {
            warn!(kind = %txn.kind, amount = %txn.amount, error = %e, "rejected transaction");
            return Err(FintrackError::Validation(e.to_string()));
        }

        let txn = self.storage.transactions.create(txn)?;
        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, category = %txn.category, "recorded transaction");

        let budget_alert = if txn.is_expense() {
            let budgets = self.storage.budgets.list(user)?;
            let transactions = self.storage.transactions.list(user)?;
            check_expense_against_budget(&budgets, &transactions, &txn)
        } else {
            None
        };

        if let Some(alert) = &budget_alert {
            warn!(category = %txn.category, value = alert.value, "expense pushed budget over limit");
        }

        Ok(RecordedTransaction {
            transaction: txn,
            budget_alert,
        })
    }

    /// List transactions, newest first
    pub fn list(&self, user: &UserId, filter: &TransactionFilter) -> FintrackResult<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .storage
            .transactions
            .list(user)?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }
}
