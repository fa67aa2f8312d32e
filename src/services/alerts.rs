//! Alert derivation
//!
//! Builds the alert list from budgets, transactions and goals as of `today`.
//! The order is fixed: budget alerts, then the spending trend, then goals,
//! then the income drop.

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use super::budget::evaluate_budget;
use crate::models::{
    Alert, AlertKind, Budget, BudgetEvaluation, BudgetPeriod, BudgetStatus, FinanceSnapshot,
    FinancialGoal, Money, Transaction, TransactionKind,
};
use crate::reports::aggregation::{in_period, in_window, total_by_kind};

/// Length of each spending trend window
pub const TREND_WINDOW_DAYS: i64 = 30;

/// Spending increase above which the trend alert fires
pub const TREND_THRESHOLD_PERCENT: Decimal = dec!(20);

/// Goals due within this many days are checked for progress
pub const GOAL_DUE_SOON_DAYS: i64 = 30;

/// Progress below which a goal due soon is flagged
pub const GOAL_DUE_SOON_PROGRESS: f64 = 80.0;

/// Income below this share of last month's triggers the drop alert
pub const INCOME_DROP_RATIO: Decimal = dec!(0.8);

/// Derive every alert for a snapshot
pub fn derive_snapshot_alerts(snapshot: &FinanceSnapshot, today: NaiveDate) -> Vec<Alert> {
    derive_alerts(
        &snapshot.budgets,
        &snapshot.transactions,
        &snapshot.goals,
        today,
    )
}

/// Derive every alert, in fixed order
pub fn derive_alerts(
    budgets: &[Budget],
    transactions: &[Transaction],
    goals: &[FinancialGoal],
    today: NaiveDate,
) -> Vec<Alert> {
    let mut alerts = budget_alerts(budgets, transactions, today);
    alerts.extend(spending_trend_alert(transactions, today));
    alerts.extend(goal_alerts(goals, today));
    alerts.extend(income_drop_alert(transactions, today));

    debug!(count = alerts.len(), %today, "derived alerts");
    alerts
}

/// One alert per near or over budget for the month containing `today`
pub fn budget_alerts(budgets: &[Budget], transactions: &[Transaction], today: NaiveDate) -> Vec<Alert> {
    let current = BudgetPeriod::from_date(today);

    budgets
        .iter()
        .filter(|b| b.period == current)
        .map(|b| evaluate_budget(b, transactions))
        .filter(|eval| eval.status.is_alerting())
        .filter_map(|eval| budget_alert(&eval))
        .collect()
}

fn budget_alert(eval: &BudgetEvaluation) -> Option<Alert> {
    let pct = eval.percentage();
    match eval.status {
        BudgetStatus::Over => Some(Alert::new(
            AlertKind::BudgetExceeded,
            format!("Budget exceeded: {}", eval.category),
            format!(
                "{:.0}% of budget used ({} of {}, {} over)",
                pct,
                eval.spent,
                eval.limit,
                -eval.remaining()
            ),
            pct,
        )),
        BudgetStatus::Near => Some(Alert::new(
            AlertKind::BudgetNearLimit,
            format!("Budget near limit: {}", eval.category),
            format!(
                "{:.0}% of budget used ({} of {}, {} left)",
                pct,
                eval.spent,
                eval.limit,
                eval.remaining()
            ),
            pct,
        )),
        BudgetStatus::Under => None,
    }
}

/// Expense totals for the current and previous 30-day windows
pub fn trend_windows(transactions: &[Transaction], today: NaiveDate) -> (Money, Money) {
    let window = Duration::days(TREND_WINDOW_DAYS);
    let current_start = today - window;
    let previous_start = current_start - window;

    let current = in_window(transactions, current_start, today + Duration::days(1));
    let previous = in_window(transactions, previous_start, current_start);

    (
        total_by_kind(&current, TransactionKind::Expense),
        total_by_kind(&previous, TransactionKind::Expense),
    )
}

/// Fires when the last 30 days' spending is more than 20% above the 30 before
pub fn spending_trend_alert(transactions: &[Transaction], today: NaiveDate) -> Option<Alert> {
    let (current, previous) = trend_windows(transactions, today);
    let increase = (current - previous).percent_of(previous)?;

    if increase <= TREND_THRESHOLD_PERCENT {
        return None;
    }

    let value = increase.to_f64().unwrap_or_default();
    Some(Alert::new(
        AlertKind::SpendingIncrease,
        "Spending increase",
        format!(
            "Spending in the last 30 days is up {:.0}% ({} vs {})",
            value, current, previous
        ),
        value,
    ))
}

/// Overdue and due-soon goals, in list order
pub fn goal_alerts(goals: &[FinancialGoal], today: NaiveDate) -> Vec<Alert> {
    goals.iter().filter_map(|g| goal_alert(g, today)).collect()
}

fn goal_alert(goal: &FinancialGoal, today: NaiveDate) -> Option<Alert> {
    let days = goal.days_remaining(today);
    let progress = goal.progress_percentage();

    // Overdue wins when both could apply
    if days < 0 && progress < 100.0 {
        return Some(Alert::new(
            AlertKind::GoalOverdue,
            format!("Goal overdue: {}", goal.title),
            format!(
                "Target date passed {} days ago at {:.0}% progress",
                -days, progress
            ),
            progress,
        ));
    }

    if days > 0 && days <= GOAL_DUE_SOON_DAYS && progress < GOAL_DUE_SOON_PROGRESS {
        return Some(Alert::new(
            AlertKind::GoalNearDue,
            format!("Goal due soon: {}", goal.title),
            format!("{} days left at {:.0}% progress", days, progress),
            progress,
        ));
    }

    None
}

/// Fires when this month's income is below 80% of last month's
pub fn income_drop_alert(transactions: &[Transaction], today: NaiveDate) -> Option<Alert> {
    let current_period = BudgetPeriod::from_date(today);
    let current = total_by_kind(&in_period(transactions, current_period), TransactionKind::Income);
    let previous = total_by_kind(
        &in_period(transactions, current_period.prev()),
        TransactionKind::Income,
    );

    if !previous.is_positive() || current.amount() >= previous.amount() * INCOME_DROP_RATIO {
        return None;
    }

    let value = current
        .percent_of(previous)
        .and_then(|pct| pct.to_f64())
        .unwrap_or_default();

    Some(Alert::new(
        AlertKind::IncomeDrop,
        "Income drop",
        format!(
            "Income this month is down {:.0}% from last month ({} vs {})",
            100.0 - value,
            current,
            previous
        ),
        value,
    ))
}

/// Check a just-recorded expense against its month's category budget
///
/// `transactions` must already include the expense.
pub fn check_expense_against_budget(
    budgets: &[Budget],
    transactions: &[Transaction],
    expense: &Transaction,
) -> Option<Alert> {
    if !expense.is_expense() {
        return None;
    }

    let period = BudgetPeriod::from_date(expense.date);
    let budget = budgets.iter().find(|b| b.same_slot(&expense.category, period))?;
    let eval = evaluate_budget(budget, transactions);

    match eval.status {
        BudgetStatus::Over => budget_alert(&eval),
        _ => None,
    }
}
