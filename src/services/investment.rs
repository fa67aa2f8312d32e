//! Investment service

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Investment, Money, UserId};
use crate::reports::PortfolioReport;
use crate::storage::Storage;

pub struct InvestmentService<'a> {
    storage: &'a Storage,
}

impl<'a> InvestmentService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an investment, estimating its current value once
    pub fn add(
        &self,
        user: &UserId,
        kind: &str,
        principal: Money,
        annual_return_rate: Decimal,
        date: NaiveDate,
    ) -> FintrackResult<Investment> {
        let investment = Investment::new(user.clone(), kind.trim(), principal, annual_return_rate, date);

        if let Err(e) = investment.validate() {
            warn!(%kind, amount = %principal, error = %e, "rejected investment");
            return Err(FintrackError::Validation(e.to_string()));
        }

        let investment = self.storage.investments.create(investment)?;
        info!(
            id = %investment.id,
            kind = %investment.kind,
            principal = %investment.principal,
            current_value = %investment.current_value,
            "recorded investment"
        );
        Ok(investment)
    }

    pub fn list(&self, user: &UserId) -> FintrackResult<Vec<Investment>> {
        self.storage.investments.list(user)
    }

    pub fn portfolio(&self, user: &UserId) -> FintrackResult<PortfolioReport> {
        Ok(PortfolioReport::generate(&self.list(user)?))
    }
}
