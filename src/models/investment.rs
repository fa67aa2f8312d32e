//! Investment model
//!
//! The current value is a one-shot estimate taken at creation time from the
//! expected annual return. It is never revalued afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{InvestmentId, UserId};
use super::money::Money;

/// Accepted range for the expected annual return, in percent
pub const MIN_RETURN_RATE: Decimal = dec!(-100);
pub const MAX_RETURN_RATE: Decimal = dec!(1000);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: InvestmentId,

    pub user_id: UserId,

    /// Free-form instrument kind ("stocks", "bonds", "crypto", ...)
    pub kind: String,

    /// Amount invested
    pub principal: Money,

    /// Expected annual return, in percent
    pub annual_return_rate: Decimal,

    pub date: NaiveDate,

    /// principal × (1 + rate/100), fixed at creation
    pub current_value: Money,

    pub created_at: DateTime<Utc>,
}

impl Investment {
    /// Create a new investment, estimating its current value
    pub fn new(
        user_id: UserId,
        kind: impl Into<String>,
        principal: Money,
        annual_return_rate: Decimal,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: InvestmentId::new(),
            user_id,
            kind: kind.into(),
            principal,
            annual_return_rate,
            date,
            current_value: estimate_value(principal, annual_return_rate),
            created_at: Utc::now(),
        }
    }

    /// current_value − principal
    pub fn gain(&self) -> Money {
        self.current_value - self.principal
    }

    /// Validate the investment
    pub fn validate(&self) -> Result<(), InvestmentValidationError> {
        if self.kind.trim().is_empty() {
            return Err(InvestmentValidationError::MissingKind);
        }

        if !self.principal.is_positive() {
            return Err(InvestmentValidationError::NonPositivePrincipal(self.principal));
        }

        if self.principal.exceeds_limit() {
            return Err(InvestmentValidationError::PrincipalTooLarge(self.principal));
        }

        if !(MIN_RETURN_RATE..=MAX_RETURN_RATE).contains(&self.annual_return_rate) {
            return Err(InvestmentValidationError::RateOutOfRange(self.annual_return_rate));
        }

        Ok(())
    }
}

/// Static value estimate: principal grown by one year's expected return
///
/// Saturates at the `Decimal` range; out-of-range inputs are rejected later
/// by [`Investment::validate`].
pub fn estimate_value(principal: Money, annual_return_rate: Decimal) -> Money {
    let growth = annual_return_rate
        .checked_div(Decimal::ONE_HUNDRED)
        .unwrap_or_default();
    let factor = Decimal::ONE.saturating_add(growth);
    Money::new(principal.amount().saturating_mul(factor))
}

impl fmt::Display for Investment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {}% -> {}",
            self.kind, self.principal, self.annual_return_rate, self.current_value
        )
    }
}

/// Validation errors for investments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvestmentValidationError {
    MissingKind,
    NonPositivePrincipal(Money),
    PrincipalTooLarge(Money),
    RateOutOfRange(Decimal),
}

impl fmt::Display for InvestmentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKind => write!(f, "Investment kind is required"),
            Self::NonPositivePrincipal(amount) => {
                write!(f, "Investment amount must be positive, got {}", amount)
            }
            Self::PrincipalTooLarge(amount) => write!(
                f,
                "Investment amount {} exceeds the maximum of {}",
                amount,
                Money::MAX_AMOUNT
            ),
            Self::RateOutOfRange(rate) => write!(
                f,
                "Expected return must be between {}% and {}%, got {}%",
                MIN_RETURN_RATE, MAX_RETURN_RATE, rate
            ),
        }
    }
}

impl std::error::Error for InvestmentValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[test]
    fn test_current_value_estimate() {
        let inv = Investment::new(user(), "stocks", Money::from_units(1000), dec!(8), date());
        assert_eq!(inv.current_value, Money::new(dec!(1080)));
        assert_eq!(inv.gain(), Money::new(dec!(80)));
    }

    #[test]
    fn test_negative_rate_loses_value() {
        let inv = Investment::new(user(), "crypto", Money::from_units(500), dec!(-10), date());
        assert_eq!(inv.current_value, Money::new(dec!(450)));
        assert!(inv.gain().is_negative());
    }

    #[test]
    fn test_validation() {
        let inv = Investment::new(user(), "bonds", Money::zero(), dec!(3), date());
        assert!(matches!(
            inv.validate(),
            Err(InvestmentValidationError::NonPositivePrincipal(_))
        ));

        let inv = Investment::new(user(), " ", Money::from_units(10), dec!(3), date());
        assert_eq!(inv.validate(), Err(InvestmentValidationError::MissingKind));
    }

    #[test]
    fn test_oversized_inputs_are_rejected_without_panicking() {
        let huge = Money::new(dec!(50000000000000000000000000000));
        let inv = Investment::new(user(), "stocks", huge, dec!(100), date());
        assert_eq!(inv.current_value, Money::new(Decimal::MAX));
        assert!(matches!(
            inv.validate(),
            Err(InvestmentValidationError::PrincipalTooLarge(_))
        ));

        let inv = Investment::new(user(), "stocks", Money::from_units(1000), dec!(5000), date());
        assert!(matches!(
            inv.validate(),
            Err(InvestmentValidationError::RateOutOfRange(_))
        ));

        let inv = Investment::new(user(), "stocks", Money::from_units(1000), dec!(-100), date());
        assert_eq!(inv.current_value, Money::zero());
        assert!(inv.validate().is_ok());
    }
}
