//! Investment Portfolio Report
//!
//! Totals over the user's investments using their static value estimates.

use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::display::report::{format_percentage, separator, truncate};
use crate::models::{Investment, Money};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioReport {
    pub holdings: Vec<Investment>,
    pub total_invested: Money,
    pub current_value: Money,
    /// current_value − total_invested
    pub total_return: Money,
    /// total_return / total_invested × 100; 0 when nothing is invested
    pub return_percentage: f64,
}

impl PortfolioReport {
    pub fn generate(investments: &[Investment]) -> Self {
        let total_invested: Money = investments.iter().map(|i| i.principal).sum();
        let current_value: Money = investments.iter().map(|i| i.current_value).sum();
        let total_return = current_value - total_invested;

        let return_percentage = total_return
            .percent_of(total_invested)
            .and_then(|pct| pct.to_f64())
            .unwrap_or_default();

        Self {
            holdings: investments.to_vec(),
            total_invested,
            current_value,
            total_return,
            return_percentage,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Investment Portfolio\n");
        output.push_str(&"=".repeat(70));
        output.push('\n');

        if self.holdings.is_empty() {
            output.push_str("No investments recorded.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<14} {:<18} {:>12} {:>8} {:>12}\n",
            "ID", "Kind", "Invested", "Rate", "Value"
        ));
        output.push_str(&separator(70));
        output.push('\n');

        for inv in &self.holdings {
            output.push_str(&format!(
                "{:<14} {:<18} {:>12} {:>7}% {:>12}\n",
                inv.id.to_string(),
                truncate(&inv.kind, 18),
                inv.principal,
                inv.annual_return_rate,
                inv.current_value
            ));
        }

        output.push_str(&separator(70));
        output.push('\n');
        output.push_str(&format!(
            "Total invested: {}\n",
            self.total_invested.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Current value:  {}\n",
            self.current_value.format_with_symbol(currency)
        ));
        output.push_str(&format!(
            "Return:         {} ({})\n",
            self.total_return.format_with_symbol(currency),
            format_percentage(self.return_percentage)
        ));

        output
    }
}
