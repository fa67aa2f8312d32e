//! fintrack - personal finance tracking
//!
//! This library provides the financial computation engine behind the
//! `fintrack` command-line application: per-user transactions, monthly
//! budgets, investments and goals, the alerts derived from them, and
//! standalone loan, growth and savings calculators.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, transactions, budgets, goals, etc.)
//! - `calculators`: Loan amortization, growth projection and goal solving
//! - `reports`: Aggregation plus summary and portfolio reports
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer, including budget evaluation and alerts
//! - `display`: Terminal formatting
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust
//! use fintrack::calculators::{calculate_loan, LoanInput};
//!
//! let result = calculate_loan(&LoanInput {
//!     principal: Some(10_000.0),
//!     annual_rate: Some(0.0),
//!     years: Some(1.0),
//! })
//! .unwrap();
//! assert!((result.monthly_payment - 833.33).abs() < 0.01);
//! ```

pub mod calculators;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
