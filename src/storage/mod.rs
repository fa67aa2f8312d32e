//! Storage layer for fintrack
//!
//! The record store behind the services: one JSON file per record type with
//! atomic writes, scoped per user on every read.

pub mod file_io;
pub mod repository;

pub use file_io::{read_json, write_json_atomic};
pub use repository::{JsonRepository, Record};

use tracing::info;

use crate::config::paths::FintrackPaths;
use crate::error::FintrackError;
use crate::models::{Budget, FinanceSnapshot, FinancialGoal, Investment, Transaction, UserId};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FintrackPaths,
    pub transactions: JsonRepository<Transaction>,
    pub budgets: JsonRepository<Budget>,
    pub investments: JsonRepository<Investment>,
    pub goals: JsonRepository<FinancialGoal>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FintrackPaths) -> Result<Self, FintrackError> {
        paths.ensure_directories()?;

        Ok(Self {
            transactions: JsonRepository::new(paths.transactions_file()),
            budgets: JsonRepository::new(paths.budgets_file()),
            investments: JsonRepository::new(paths.investments_file()),
            goals: JsonRepository::new(paths.goals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FintrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FintrackError> {
        self.transactions.load()?;
        self.budgets.load()?;
        self.investments.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Write every record file, creating empty ones where missing
    pub fn save_all(&self) -> Result<(), FintrackError> {
        self.transactions.save()?;
        self.budgets.save()?;
        self.investments.save()?;
        self.goals.save()?;
        info!(path = %self.paths.data_dir().display(), "saved all record files");
        Ok(())
    }

    /// Immutable copy of everything a user owns
    pub fn snapshot(&self, user: &UserId) -> Result<FinanceSnapshot, FintrackError> {
        Ok(FinanceSnapshot {
            user_id: user.clone(),
            transactions: self.transactions.list(user)?,
            budgets: self.budgets.list(user)?,
            investments: self.investments.list(user)?,
            goals: self.goals.list(user)?,
        })
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
