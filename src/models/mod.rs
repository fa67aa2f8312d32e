//! Core data models for fintrack
//!
//! This module contains all the data structures that represent the personal
//! finance domain: transactions, budgets, investments, goals and the alerts
//! derived from them.

pub mod alert;
pub mod budget;
pub mod goal;
pub mod ids;
pub mod investment;
pub mod money;
pub mod period;
pub mod snapshot;
pub mod transaction;

pub use alert::{Alert, AlertKind, AlertSeverity};
pub use budget::{Budget, BudgetEvaluation, BudgetStatus, BudgetValidationError};
pub use goal::{FinancialGoal, GoalCategory, GoalValidationError};
pub use ids::{BudgetId, GoalId, InvestmentId, TransactionId, UserId};
pub use investment::{Investment, InvestmentValidationError};
pub use money::{Money, MoneyParseError};
pub use period::{BudgetPeriod, PeriodParseError};
pub use snapshot::FinanceSnapshot;
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
