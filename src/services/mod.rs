//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, the budget evaluator and the alert deriver.

pub mod alerts;
pub mod budget;
pub mod goal;
pub mod investment;
pub mod transaction;

pub use alerts::{check_expense_against_budget, derive_alerts, derive_snapshot_alerts};
pub use budget::{ensure_unique, evaluate_budget, evaluate_budgets, BudgetService};
pub use goal::{GoalProgress, GoalService, NewGoal};
pub use investment::InvestmentService;
pub use transaction::{NewTransaction, RecordedTransaction, TransactionFilter, TransactionService};
