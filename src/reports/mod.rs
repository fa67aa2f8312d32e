//! Reports module for fintrack
//!
//! Aggregation over transaction lists plus the financial summary and
//! investment portfolio reports built on top of it.

pub mod aggregation;
pub mod portfolio;
pub mod summary;

pub use aggregation::{by_category, by_month, in_period, in_window, net_balance, total_by_kind, MonthlyTotals};
pub use portfolio::PortfolioReport;
pub use summary::{CategoryShare, FinancialSummary, MonthlyRow, ReportRange};
