//! Budget status display formatting

use super::report::{format_bar, separator, truncate};
use crate::models::{BudgetEvaluation, BudgetPeriod, BudgetStatus};

fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Under => "ok",
        BudgetStatus::Near => "NEAR",
        BudgetStatus::Over => "OVER",
    }
}

/// Format budget evaluations for one month
pub fn format_budget_statuses(period: BudgetPeriod, evaluations: &[BudgetEvaluation]) -> String {
    let mut output = format!("Budgets for {}\n", period);

    if evaluations.is_empty() {
        output.push_str("No budgets for this period.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<16} {:>11} {:>11} {:>11} {:>6}  {:<20} {}\n",
        "Category", "Limit", "Spent", "Remaining", "Used", "", "Status"
    ));
    output.push_str(&separator(88));
    output.push('\n');

    for eval in evaluations {
        output.push_str(&format!(
            "{:<16} {:>11} {:>11} {:>11} {:>5.0}%  {:<20} {}\n",
            truncate(&eval.category, 16),
            eval.limit,
            eval.spent,
            eval.remaining(),
            eval.percentage(),
            format_bar(eval.progress(), 100.0, 20),
            status_label(eval.status)
        ));
    }

    output
}
