//! Financial goal model
//!
//! A savings target with a deadline. Contributions only ever increase the
//! current amount and are clamped at the target.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{GoalId, UserId};
use super::money::Money;

/// What the goal is saving for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalCategory {
    #[default]
    Savings,
    Investment,
    DebtPayment,
    EmergencyFund,
    Other,
}

impl GoalCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Savings => "Savings",
            Self::Investment => "Investment",
            Self::DebtPayment => "Debt payment",
            Self::EmergencyFund => "Emergency fund",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Savings => "savings",
            Self::Investment => "investment",
            Self::DebtPayment => "debt_payment",
            Self::EmergencyFund => "emergency_fund",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

impl FromStr for GoalCategory {
    type Err = GoalValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "savings" => Ok(Self::Savings),
            "investment" => Ok(Self::Investment),
            "debt_payment" | "debt" => Ok(Self::DebtPayment),
            "emergency_fund" | "emergency" => Ok(Self::EmergencyFund),
            "other" => Ok(Self::Other),
            other => Err(GoalValidationError::UnknownCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub id: GoalId,

    pub user_id: UserId,

    pub title: String,

    pub target_amount: Money,

    pub current_amount: Money,

    pub target_date: NaiveDate,

    #[serde(default)]
    pub category: GoalCategory,

    #[serde(default)]
    pub description: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl FinancialGoal {
    /// Create a new goal
    ///
    /// A starting amount above the target is clamped to the target.
    pub fn new(
        user_id: UserId,
        title: impl Into<String>,
        target_amount: Money,
        current_amount: Money,
        target_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            user_id,
            title: title.into(),
            target_amount,
            current_amount: current_amount.min(target_amount),
            target_date,
            category: GoalCategory::default(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_category(mut self, category: GoalCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a contribution, clamping at the target
    ///
    /// Returns the amount actually applied.
    pub fn contribute(&mut self, amount: Money) -> Money {
        let before = self.current_amount;
        self.current_amount = (self.current_amount + amount).min(self.target_amount);
        self.updated_at = Utc::now();
        self.current_amount - before
    }

    /// current / target × 100 (unclamped)
    pub fn progress_percentage(&self) -> f64 {
        self.current_amount
            .percent_of(self.target_amount)
            .and_then(|pct| pct.to_f64())
            .unwrap_or_default()
    }

    /// Amount still needed to reach the target
    pub fn remaining(&self) -> Money {
        (self.target_amount - self.current_amount).max(Money::zero())
    }

    pub fn is_complete(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Whole days from `today` to the target date; negative once past due
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.target_date - today).num_days()
    }

    /// Validate the goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.title.trim().is_empty() {
            return Err(GoalValidationError::MissingTitle);
        }

        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if self.target_amount.exceeds_limit() {
            return Err(GoalValidationError::AmountTooLarge(self.target_amount));
        }

        if self.current_amount.is_negative() {
            return Err(GoalValidationError::NegativeCurrent(self.current_amount));
        }

        Ok(())
    }
}

impl fmt::Display for FinancialGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} / {} by {}",
            self.title, self.current_amount, self.target_amount, self.target_date
        )
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    MissingTitle,
    NonPositiveTarget(Money),
    NegativeCurrent(Money),
    NonPositiveContribution(Money),
    AmountTooLarge(Money),
    UnknownCategory(String),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Goal title is required"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target must be positive, got {}", amount)
            }
            Self::NegativeCurrent(amount) => {
                write!(f, "Goal current amount cannot be negative, got {}", amount)
            }
            Self::NonPositiveContribution(amount) => {
                write!(f, "Contribution must be positive, got {}", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, Money::MAX_AMOUNT)
            }
            Self::UnknownCategory(s) => write!(
                f,
                "Unknown goal category '{}' (expected savings, investment, debt_payment, emergency_fund or other)",
                s
            ),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal(target: i64, current: i64) -> FinancialGoal {
        FinancialGoal::new(
            UserId::new("user-1").unwrap(),
            "Emergency fund",
            Money::from_units(target),
            Money::from_units(current),
            date(2025, 12, 31),
        )
    }

    #[test]
    fn test_new_clamps_current_to_target() {
        let g = goal(1000, 1500);
        assert_eq!(g.current_amount, Money::from_units(1000));
        assert!(g.is_complete());
    }

    #[test]
    fn test_contribute_clamps() {
        let mut g = goal(1000, 900);
        let applied = g.contribute(Money::from_units(250));
        assert_eq!(applied, Money::from_units(100));
        assert_eq!(g.current_amount, Money::from_units(1000));
        assert_eq!(g.remaining(), Money::zero());
    }

    #[test]
    fn test_progress() {
        let g = goal(1000, 250);
        assert_eq!(g.progress_percentage(), 25.0);
        assert_eq!(g.remaining(), Money::new(dec!(750)));
    }

    #[test]
    fn test_days_remaining() {
        let g = goal(1000, 0);
        assert_eq!(g.days_remaining(date(2025, 12, 1)), 30);
        assert_eq!(g.days_remaining(date(2025, 12, 31)), 0);
        assert_eq!(g.days_remaining(date(2026, 1, 2)), -2);
    }

    #[test]
    fn test_validation() {
        assert!(goal(1000, 0).validate().is_ok());
        assert!(matches!(
            goal(0, 0).validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));

        let mut untitled = goal(1000, 0);
        untitled.title = "   ".into();
        assert_eq!(untitled.validate(), Err(GoalValidationError::MissingTitle));

        assert!(matches!(
            goal(2_000_000_000_000_000, 0).validate(),
            Err(GoalValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_category_parse_and_serde() {
        assert_eq!(
            "emergency-fund".parse::<GoalCategory>().unwrap(),
            GoalCategory::EmergencyFund
        );
        assert!("vacation".parse::<GoalCategory>().is_err());
        assert_eq!(
            serde_json::to_string(&GoalCategory::DebtPayment).unwrap(),
            "\"debt_payment\""
        );
    }
}
