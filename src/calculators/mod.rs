//! Financial calculators
//!
//! Standalone, pure computations driven directly by user input:
//!
//! - `loan`: fixed-payment (annuity) loan amortization
//! - `growth`: compound growth of an initial amount plus monthly contributions
//! - `savings`: months needed to reach a savings target
//!
//! Inputs are `Option<f64>` so a missing field is distinguishable from zero.
//! Every entry point validates at its boundary and returns
//! `FintrackError::Validation` before computing anything. A result that
//! overflows `f64` is also reported as `Validation` rather than returned as
//! infinity or NaN.

pub mod growth;
pub mod loan;
pub mod savings;

pub use growth::{project_growth, GrowthInput, GrowthResult};
pub use loan::{amortization_schedule, calculate_loan, LoanInput, LoanResult, ScheduleRow};
pub use savings::{solve_time_to_goal, SavingsGoalInput, SavingsGoalResult};

use crate::error::{FintrackError, FintrackResult};

/// Months per year
pub(crate) const MONTHS_PER_YEAR: f64 = 12.0;

/// Convert an annual percentage rate into a monthly decimal rate
pub fn monthly_rate(annual_percent: f64) -> f64 {
    annual_percent / 100.0 / MONTHS_PER_YEAR
}

/// Future value of `initial` plus `monthly` contributions after `periods`
/// months at monthly rate `rate`
///
/// Returns `(fv_initial, fv_contributions)`. A zero amount stays zero even
/// when the growth factor overflows.
pub(crate) fn future_value(initial: f64, monthly: f64, rate: f64, periods: f64) -> (f64, f64) {
    let growth = (1.0 + rate).powf(periods);
    let fv_initial = if initial == 0.0 { 0.0 } else { initial * growth };
    let fv_contributions = if monthly == 0.0 {
        0.0
    } else if rate == 0.0 {
        monthly * periods
    } else {
        monthly * (growth - 1.0) / rate
    };
    (fv_initial, fv_contributions)
}

/// Reject a computed value that overflowed or became NaN
pub(crate) fn finite(name: &str, value: f64) -> FintrackResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FintrackError::Validation(format!(
            "{} is too large to compute for these inputs",
            name
        )))
    }
}

/// Require a field to be present and finite
pub(crate) fn required(name: &str, value: Option<f64>) -> FintrackResult<f64> {
    match value {
        None => Err(FintrackError::Validation(format!("{} is required", name))),
        Some(v) if !v.is_finite() => Err(FintrackError::Validation(format!(
            "{} must be a number",
            name
        ))),
        Some(v) => Ok(v),
    }
}

/// Optional field, defaulting when absent; must be finite when given
pub(crate) fn optional(name: &str, value: Option<f64>, default: f64) -> FintrackResult<f64> {
    match value {
        None => Ok(default),
        Some(_) => required(name, value),
    }
}

pub(crate) fn positive(name: &str, value: f64) -> FintrackResult<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(FintrackError::Validation(format!(
            "{} must be greater than zero",
            name
        )))
    }
}

pub(crate) fn non_negative(name: &str, value: f64) -> FintrackResult<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(FintrackError::Validation(format!(
            "{} cannot be negative",
            name
        )))
    }
}

/// Monthly rate must stay above -100% for compounding to be defined
pub(crate) fn compoundable(rate: f64) -> FintrackResult<f64> {
    if rate > -1.0 {
        Ok(rate)
    } else {
        Err(FintrackError::Validation(
            "Monthly rate must be above -100%".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        assert_eq!(monthly_rate(12.0), 0.01);
        assert_eq!(monthly_rate(0.0), 0.0);
    }

    #[test]
    fn test_future_value_zero_rate_is_linear() {
        let (fv_initial, fv_contrib) = future_value(1000.0, 100.0, 0.0, 12.0);
        assert_eq!(fv_initial, 1000.0);
        assert_eq!(fv_contrib, 1200.0);
    }

    #[test]
    fn test_future_value_zero_amounts_survive_overflow() {
        // (1.01)^1e6 overflows to infinity
        let (fv_initial, fv_contrib) = future_value(0.0, 0.0, 0.01, 1e6);
        assert_eq!(fv_initial, 0.0);
        assert_eq!(fv_contrib, 0.0);

        let (fv_initial, _) = future_value(1.0, 0.0, 0.01, 1e6);
        assert!(fv_initial.is_infinite());
    }

    #[test]
    fn test_finite() {
        assert_eq!(finite("Total", 1.5).unwrap(), 1.5);
        assert!(finite("Total", f64::INFINITY).unwrap_err().is_validation());
        assert!(finite("Total", f64::NAN).unwrap_err().is_validation());
    }

    #[test]
    fn test_required_and_optional() {
        assert!(required("Rate", None).unwrap_err().is_validation());
        assert!(required("Rate", Some(f64::NAN)).unwrap_err().is_validation());
        assert_eq!(optional("Monthly", None, 0.0).unwrap(), 0.0);
        assert!(optional("Monthly", Some(f64::INFINITY), 0.0).is_err());
    }
}
