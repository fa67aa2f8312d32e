//! Goal display formatting

use super::report::{format_bar, separator, truncate};
use crate::services::GoalProgress;

/// Format goals with progress and time left
pub fn format_goal_list(goals: &[GoalProgress]) -> String {
    if goals.is_empty() {
        return "No goals found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<14} {:<20} {:<15} {:>11} {:>11} {:>5}  {:<12} {}\n",
        "ID", "Title", "Category", "Current", "Target", "%", "", "Due"
    ));
    output.push_str(&separator(100));
    output.push('\n');

    for entry in goals {
        let goal = &entry.goal;
        let due = match entry.days_remaining {
            d if d < 0 => format!("{} ({} days overdue)", goal.target_date, -d),
            0 => format!("{} (today)", goal.target_date),
            d => format!("{} ({} days)", goal.target_date, d),
        };

        output.push_str(&format!(
            "{:<14} {:<20} {:<15} {:>11} {:>11} {:>4.0}%  {:<12} {}\n",
            goal.id.to_string(),
            truncate(&goal.title, 20),
            goal.category.label(),
            goal.current_amount,
            goal.target_amount,
            entry.percentage,
            format_bar(entry.percentage, 100.0, 12),
            due
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialGoal, Money, UserId};
    use chrono::NaiveDate;

    #[test]
    fn test_overdue_goal_row() {
        let goal = FinancialGoal::new(
            UserId::new("u").unwrap(),
            "Laptop",
            Money::from_units(1000),
            Money::from_units(500),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let entry = GoalProgress {
            percentage: goal.progress_percentage(),
            remaining: goal.remaining(),
            days_remaining: -3,
            goal,
        };

        let output = format_goal_list(&[entry]);
        assert!(output.contains("Laptop"));
        assert!(output.contains("50%"));
        assert!(output.contains("3 days overdue"));
    }
}
