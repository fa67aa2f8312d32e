//! Savings goal solver
//!
//! Solves the future value of an annuity for the number of monthly periods:
//! n = ln(1 + remaining·r / M) / ln(1 + r). The result is always in months;
//! conversion to years is a presentation concern.

use serde::Serialize;
use tracing::debug;

use super::{compoundable, finite, future_value, monthly_rate, non_negative, optional, positive, required};
use crate::error::{FintrackError, FintrackResult};

/// Goal solver input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SavingsGoalInput {
    pub target: Option<f64>,
    /// Already saved; defaults to 0
    pub current: Option<f64>,
    pub monthly_contribution: Option<f64>,
    /// Annual interest in percent; defaults to 0
    pub annual_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsGoalResult {
    /// Months until the target is reached, possibly fractional
    pub months: f64,
    /// Projected balance after `months`, from the growth formula
    pub final_amount: f64,
    /// target − current, floored at zero
    pub remaining: f64,
}

/// Solve for the time needed to reach a savings target
///
/// # Errors
///
/// `Validation` for a missing or non-positive target or contribution, a
/// negative current amount, a monthly rate at or below -100%, or a result
/// that overflows.
/// `DomainUndefined` when the logarithm argument is not positive, which only
/// happens with negative rates.
pub fn solve_time_to_goal(input: &SavingsGoalInput) -> FintrackResult<SavingsGoalResult> {
    let target = positive("Target", required("Target", input.target)?)?;
    let current = non_negative("Current amount", optional("Current amount", input.current, 0.0)?)?;
    let monthly = positive(
        "Monthly contribution",
        required("Monthly contribution", input.monthly_contribution)?,
    )?;
    let rate = compoundable(monthly_rate(optional(
        "Annual rate",
        input.annual_rate,
        0.0,
    )?))?;

    let remaining = target - current;
    if remaining <= 0.0 {
        return Ok(SavingsGoalResult {
            months: 0.0,
            final_amount: current,
            remaining: 0.0,
        });
    }

    let months = if rate == 0.0 {
        remaining / monthly
    } else {
        let argument = 1.0 + remaining * rate / monthly;
        if argument <= 0.0 {
            return Err(FintrackError::DomainUndefined(format!(
                "a monthly contribution of {:.2} can never reach {:.2} at this rate",
                monthly, target
            )));
        }
        argument.ln() / rate.ln_1p()
    };
    let months = finite("Months to goal", months)?;

    let (fv_current, fv_contributions) = future_value(current, monthly, rate, months);
    let final_amount = finite("Final amount", fv_current + fv_contributions)?;

    debug!(target, current, monthly, rate, months, "solved time to goal");

    Ok(SavingsGoalResult {
        months,
        final_amount,
        remaining,
    })
}
