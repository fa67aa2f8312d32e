//! Immutable per-user view of all records
//!
//! Reports, evaluators and the alert deriver read from a snapshot and never
//! from the live store.

use super::budget::Budget;
use super::goal::FinancialGoal;
use super::ids::UserId;
use super::investment::Investment;
use super::transaction::Transaction;

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceSnapshot {
    pub user_id: UserId,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub investments: Vec<Investment>,
    pub goals: Vec<FinancialGoal>,
}

impl FinanceSnapshot {
    /// An empty snapshot for a user
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            transactions: Vec::new(),
            budgets: Vec::new(),
            investments: Vec::new(),
            goals: Vec::new(),
        }
    }
}
