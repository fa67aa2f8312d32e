//! Budget model
//!
//! A spending limit for one category in one month, plus the derived
//! evaluation (spent, utilization, status) computed from transactions.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, UserId};
use super::money::Money;
use super::period::BudgetPeriod;

/// Utilization above which a budget is near its limit
pub const NEAR_LIMIT_PERCENT: Decimal = dec!(80);

/// Utilization above which a budget is over its limit
pub const OVER_LIMIT_PERCENT: Decimal = dec!(100);

/// A category budget for a specific month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: BudgetId,

    pub user_id: UserId,

    pub category: String,

    pub limit: Money,

    pub period: BudgetPeriod,

    /// Last spent figure written by the store; informational only, evaluation
    /// always recomputes it from transactions
    #[serde(default)]
    pub spent: Money,

    pub created_at: DateTime<Utc>,
}

impl Budget {
    /// Create a new budget
    pub fn new(
        user_id: UserId,
        category: impl Into<String>,
        limit: Money,
        period: BudgetPeriod,
    ) -> Self {
        Self {
            id: BudgetId::new(),
            user_id,
            category: category.into(),
            limit,
            period,
            spent: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Check whether this budget covers the same (category, period) slot
    pub fn same_slot(&self, category: &str, period: BudgetPeriod) -> bool {
        self.period == period && self.category == category
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::MissingCategory);
        }

        if !self.limit.is_positive() {
            return Err(BudgetValidationError::NonPositiveLimit(self.limit));
        }

        if self.limit.exceeds_limit() {
            return Err(BudgetValidationError::LimitTooLarge(self.limit));
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} limit: {}", self.period, self.category, self.limit)
    }
}

/// Threshold classification of a budget's utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Under,
    Near,
    Over,
}

impl BudgetStatus {
    /// Classify a utilization percentage
    ///
    /// Over is strictly above 100%, near is strictly above 80%. Exactly 80% is
    /// under and exactly 100% is near.
    pub fn classify(percentage: Decimal) -> Self {
        if percentage > OVER_LIMIT_PERCENT {
            Self::Over
        } else if percentage > NEAR_LIMIT_PERCENT {
            Self::Near
        } else {
            Self::Under
        }
    }

    /// Whether this status warrants an alert
    pub fn is_alerting(&self) -> bool {
        matches!(self, Self::Near | Self::Over)
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "under"),
            Self::Near => write!(f, "near"),
            Self::Over => write!(f, "over"),
        }
    }
}

/// Derived spent-vs-limit figures for one budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetEvaluation {
    pub budget_id: BudgetId,
    pub category: String,
    pub period: BudgetPeriod,
    pub limit: Money,
    pub spent: Money,
    /// spent / limit × 100, exact
    pub utilization: Decimal,
    pub status: BudgetStatus,
}

impl BudgetEvaluation {
    /// Build an evaluation from a budget and its spent amount
    pub fn new(budget: &Budget, spent: Money) -> Self {
        let utilization = spent.percent_of(budget.limit).unwrap_or(Decimal::ZERO);
        Self {
            budget_id: budget.id,
            category: budget.category.clone(),
            period: budget.period,
            limit: budget.limit,
            spent,
            utilization,
            status: BudgetStatus::classify(utilization),
        }
    }

    /// limit − spent, negative when overspent
    pub fn remaining(&self) -> Money {
        self.limit - self.spent
    }

    /// Unclamped utilization for message text
    pub fn percentage(&self) -> f64 {
        self.utilization.to_f64().unwrap_or_default()
    }

    /// Utilization clamped to [0, 100] for progress bars
    pub fn progress(&self) -> f64 {
        self.percentage().clamp(0.0, 100.0)
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MissingCategory,
    NonPositiveLimit(Money),
    LimitTooLarge(Money),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCategory => write!(f, "Budget category is required"),
            Self::NonPositiveLimit(limit) => {
                write!(f, "Budget limit must be positive, got {}", limit)
            }
            Self::LimitTooLarge(limit) => write!(
                f,
                "Budget limit {} exceeds the maximum of {}",
                limit,
                Money::MAX_AMOUNT
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
