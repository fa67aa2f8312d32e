//! Investment growth projection
//!
//! Final amount = P(1 + r)^n + M((1 + r)^n - 1) / r, with the contribution
//! term reducing to M·n when r is zero.

use serde::Serialize;
use tracing::debug;

use super::{
    compoundable, finite, future_value, monthly_rate, non_negative, optional, positive, required,
    MONTHS_PER_YEAR,
};
use crate::error::FintrackResult;

/// Growth projector input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GrowthInput {
    /// Starting capital; defaults to 0
    pub initial: Option<f64>,
    /// Contribution added every month; defaults to 0
    pub monthly_contribution: Option<f64>,
    /// Expected annual return in percent
    pub annual_rate: Option<f64>,
    pub years: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthResult {
    pub final_amount: f64,
    pub total_contributed: f64,
    pub total_returns: f64,
    pub initial_future_value: f64,
    pub contributions_future_value: f64,
}

/// Project the future value of an investment
///
/// # Errors
///
/// `Validation` when the rate or horizon is missing, the horizon is not
/// positive, the initial amount or contribution is negative, the monthly
/// rate is at or below -100%, or the projection overflows.
pub fn project_growth(input: &GrowthInput) -> FintrackResult<GrowthResult> {
    let initial = non_negative("Initial amount", optional("Initial amount", input.initial, 0.0)?)?;
    let monthly = non_negative(
        "Monthly contribution",
        optional("Monthly contribution", input.monthly_contribution, 0.0)?,
    )?;
    let rate = compoundable(monthly_rate(required("Annual rate", input.annual_rate)?))?;
    let years = positive("Years", required("Years", input.years)?)?;

    let periods = years * MONTHS_PER_YEAR;
    let (initial_future_value, contributions_future_value) =
        future_value(initial, monthly, rate, periods);

    let final_amount = finite("Final amount", initial_future_value + contributions_future_value)?;
    let total_contributed = finite("Total contributed", initial + monthly * periods)?;

    debug!(initial, monthly, rate, periods, final_amount, "projected growth");

    Ok(GrowthResult {
        final_amount,
        total_contributed,
        total_returns: final_amount - total_contributed,
        initial_future_value,
        contributions_future_value,
    })
}
