//! Loan amortization
//!
//! Fixed monthly payment over the term using the annuity formula:
//! PMT = P * r / (1 - (1 + r)^-n), with r the monthly rate and n the number
//! of monthly payments. A zero rate degenerates to P / n. Over very long
//! terms the payment approaches P * r.

use serde::Serialize;
use tracing::debug;

use super::{finite, monthly_rate, non_negative, positive, required, MONTHS_PER_YEAR};
use crate::error::{FintrackError, FintrackResult};

/// Longest schedule that will be generated (100 years of monthly payments)
pub const MAX_SCHEDULE_PAYMENTS: u32 = 1200;

/// Loan calculator input
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoanInput {
    /// Amount borrowed
    pub principal: Option<f64>,
    /// Nominal annual rate in percent
    pub annual_rate: Option<f64>,
    /// Term in years
    pub years: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanResult {
    pub monthly_payment: f64,
    /// monthly_payment × payment_count
    pub total_payment: f64,
    /// total_payment − principal
    pub total_interest: f64,
    /// years × 12
    pub payment_count: f64,
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleRow {
    pub number: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub balance: f64,
}

struct LoanTerms {
    principal: f64,
    rate: f64,
    payments: f64,
}

fn validate(input: &LoanInput) -> FintrackResult<LoanTerms> {
    let principal = positive("Principal", required("Principal", input.principal)?)?;
    let annual_rate = non_negative("Interest rate", required("Interest rate", input.annual_rate)?)?;
    let years = positive("Term", required("Term", input.years)?)?;

    Ok(LoanTerms {
        principal,
        rate: monthly_rate(annual_rate),
        payments: years * MONTHS_PER_YEAR,
    })
}

fn monthly_payment(terms: &LoanTerms) -> f64 {
    if terms.rate == 0.0 {
        return terms.principal / terms.payments;
    }
    // 1 - (1 + r)^-n without forming (1 + r)^n, which overflows for long terms
    let discount = -(-terms.payments * terms.rate.ln_1p()).exp_m1();
    if discount > 0.0 && discount.is_finite() {
        terms.principal * terms.rate / discount
    } else {
        terms.principal / terms.payments
    }
}

/// Compute the fixed monthly payment and totals for a loan
///
/// # Errors
///
/// `Validation` when principal or term is missing or not positive, the rate
/// is missing or negative, or the totals overflow.
pub fn calculate_loan(input: &LoanInput) -> FintrackResult<LoanResult> {
    let terms = validate(input)?;
    let payment = finite("Monthly payment", monthly_payment(&terms))?;
    let total_payment = finite("Total payment", payment * terms.payments)?;

    debug!(
        principal = terms.principal,
        rate = terms.rate,
        payments = terms.payments,
        payment,
        "computed loan payment"
    );

    Ok(LoanResult {
        monthly_payment: payment,
        total_payment,
        total_interest: total_payment - terms.principal,
        payment_count: terms.payments,
    })
}

/// Month-by-month breakdown of the loan
///
/// A fractional payment count gets one final partial row. The balance never
/// goes below zero.
///
/// # Errors
///
/// The same as [`calculate_loan`], plus `Validation` when the term needs more
/// than [`MAX_SCHEDULE_PAYMENTS`] rows.
pub fn amortization_schedule(input: &LoanInput) -> FintrackResult<Vec<ScheduleRow>> {
    let terms = validate(input)?;
    let payment = finite("Monthly payment", monthly_payment(&terms))?;
    if terms.payments.ceil() > f64::from(MAX_SCHEDULE_PAYMENTS) {
        return Err(FintrackError::Validation(format!(
            "Schedules are limited to {} payments",
            MAX_SCHEDULE_PAYMENTS
        )));
    }
    let rows = terms.payments.ceil() as u32;

    let mut balance = terms.principal;
    let mut schedule = Vec::new();

    for number in 1..=rows {
        let interest = balance * terms.rate;
        let amortization = (payment - interest).min(balance);
        balance = (balance - amortization).max(0.0);

        schedule.push(ScheduleRow {
            number,
            payment: interest + amortization,
            interest,
            principal: amortization,
            balance,
        });
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn input(principal: f64, rate: f64, years: f64) -> LoanInput {
        LoanInput {
            principal: Some(principal),
            annual_rate: Some(rate),
            years: Some(years),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6 * b.abs().max(1.0)
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let result = calculate_loan(&input(12000.0, 0.0, 1.0)).unwrap();
        assert_eq!(result.monthly_payment, 1000.0);
        assert_eq!(result.total_payment, 12000.0);
        assert_eq!(result.total_interest, 0.0);
        assert_eq!(result.payment_count, 12.0);
    }

    #[test]
    fn test_annuity_payment() {
        // 100k at 6% over 30 years
        let result = calculate_loan(&input(100_000.0, 6.0, 30.0)).unwrap();
        assert!((result.monthly_payment - 599.55).abs() < 0.01);
    }

    #[rstest]
    #[case(1000.0, 5.0, 1.0)]
    #[case(250_000.0, 3.75, 25.0)]
    #[case(5000.0, 0.0, 2.5)]
    #[case(80_000.0, 18.0, 7.0)]
    #[case(1000.0, 5.0, 20_000.0)]
    fn test_totals_are_consistent(#[case] principal: f64, #[case] rate: f64, #[case] years: f64) {
        let result = calculate_loan(&input(principal, rate, years)).unwrap();
        assert!(approx(result.total_payment, result.monthly_payment * years * 12.0));
        assert!(approx(result.total_interest, result.total_payment - principal));
    }

    #[test]
    fn test_long_term_payment_approaches_interest_only() {
        let result = calculate_loan(&input(1000.0, 5.0, 20_000.0)).unwrap();
        assert!(result.monthly_payment.is_finite());
        assert!(approx(result.monthly_payment, 1000.0 * 0.05 / 12.0));
        assert!(result.total_interest.is_finite());
    }

    #[test]
    fn test_overflowing_totals_are_rejected() {
        let err = calculate_loan(&input(1e300, 5.0, 1e10)).unwrap_err();
        assert!(err.is_validation());
    }

    #[rstest]
    #[case(LoanInput { principal: None, annual_rate: Some(5.0), years: Some(1.0) })]
    #[case(LoanInput { principal: Some(1000.0), annual_rate: None, years: Some(1.0) })]
    #[case(LoanInput { principal: Some(1000.0), annual_rate: Some(5.0), years: None })]
    #[case(input(0.0, 5.0, 1.0))]
    #[case(input(-10.0, 5.0, 1.0))]
    #[case(input(1000.0, -1.0, 1.0))]
    #[case(input(1000.0, 5.0, 0.0))]
    #[case(input(f64::NAN, 5.0, 1.0))]
    fn test_rejects_invalid_input(#[case] bad: LoanInput) {
        let err = calculate_loan(&bad).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_schedule_pays_off_balance() {
        let loan = input(10_000.0, 12.0, 1.0);
        let schedule = amortization_schedule(&loan).unwrap();
        assert_eq!(schedule.len(), 12);

        let last = schedule.last().unwrap();
        assert!(last.balance.abs() < 1e-6);

        let total_principal: f64 = schedule.iter().map(|row| row.principal).sum();
        assert!(approx(total_principal, 10_000.0));

        // First month interest is 1% of principal
        assert!(approx(schedule[0].interest, 100.0));
    }

    #[test]
    fn test_schedule_zero_rate() {
        let schedule = amortization_schedule(&input(1200.0, 0.0, 1.0)).unwrap();
        assert!(schedule.iter().all(|row| row.interest == 0.0));
        assert!(schedule.iter().all(|row| approx(row.payment, 100.0)));
        assert_eq!(schedule.last().unwrap().balance, 0.0);
    }

    #[test]
    fn test_schedule_length_is_bounded() {
        let err = amortization_schedule(&input(1000.0, 5.0, 1e9)).unwrap_err();
        assert!(err.is_validation());

        let century = amortization_schedule(&input(1000.0, 5.0, 100.0)).unwrap();
        assert_eq!(century.len(), MAX_SCHEDULE_PAYMENTS as usize);
        assert!(century.last().unwrap().balance.abs() < 1e-6);
    }
}
