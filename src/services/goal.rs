//! Goal service
//!
//! Creates savings goals and applies contributions, clamping at the target.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{FinancialGoal, GoalCategory, GoalId, GoalValidationError, Money, UserId};
use crate::storage::Storage;

/// Input for a new goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    pub description: String,
}

/// A goal with its derived progress figures
#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub goal: FinancialGoal,
    pub percentage: f64,
    pub remaining: Money,
    pub days_remaining: i64,
}

/// Service for goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a goal
    ///
    /// A starting amount above the target is clamped to the target.
    pub fn create(&self, user: &UserId, input: NewGoal) -> FintrackResult<FinancialGoal> {
        if input.current_amount.is_negative() {
            return Err(FintrackError::Validation(
                GoalValidationError::NegativeCurrent(input.current_amount).to_string(),
            ));
        }

        let goal = FinancialGoal::new(
            user.clone(),
            input.title.trim(),
            input.target_amount,
            input.current_amount,
            input.target_date,
        )
        .with_category(input.category)
        .with_description(input.description.trim());

        if let Err(e) = goal.validate() {
            warn!(title = %goal.title, error = %e, "rejected goal");
            return Err(FintrackError::Validation(e.to_string()));
        }

        if goal.current_amount < input.current_amount {
            warn!(
                title = %goal.title,
                requested = %input.current_amount,
                target = %goal.target_amount,
                "starting amount clamped to target"
            );
        }

        let goal = self.storage.goals.create(goal)?;
        info!(id = %goal.id, title = %goal.title, target = %goal.target_amount, "created goal");
        Ok(goal)
    }

    /// Add a contribution to a goal
    ///
    /// # Errors
    ///
    /// `Validation` for a non-positive or oversized amount; `NotFound` when the goal does
    /// not exist or belongs to another user.
    pub fn contribute(&self, user: &UserId, goal_id: GoalId, amount: Money) -> FintrackResult<FinancialGoal> {
        if !amount.is_positive() {
            return Err(FintrackError::Validation(
                GoalValidationError::NonPositiveContribution(amount).to_string(),
            ));
        }
        if amount.exceeds_limit() {
            return Err(FintrackError::Validation(
                GoalValidationError::AmountTooLarge(amount).to_string(),
            ));
        }

        let goal = self
            .storage
            .goals
            .update(user, goal_id, |goal| {
                let applied = goal.contribute(amount);
                if applied < amount {
                    warn!(id = %goal.id, requested = %amount, applied = %applied, "contribution clamped at target");
                }
                Ok(())
            })
            .map_err(|e| match e {
                FintrackError::NotFound { .. } => FintrackError::goal_not_found(goal_id.to_string()),
                other => other,
            })?;

        info!(id = %goal.id, current = %goal.current_amount, target = %goal.target_amount, "recorded contribution");
        Ok(goal)
    }

    /// Find a goal by full id or short display form
    pub fn find(&self, user: &UserId, identifier: &str) -> FintrackResult<FinancialGoal> {
        self.storage
            .goals
            .list(user)?
            .into_iter()
            .find(|g| g.id.matches(identifier))
            .ok_or_else(|| FintrackError::goal_not_found(identifier))
    }

    /// All goals with progress as of `today`, in creation order
    pub fn list(&self, user: &UserId, today: NaiveDate) -> FintrackResult<Vec<GoalProgress>> {
        Ok(self
            .storage
            .goals
            .list(user)?
            .into_iter()
            .map(|goal| GoalProgress {
                percentage: goal.progress_percentage(),
                remaining: goal.remaining(),
                days_remaining: goal.days_remaining(today),
                goal,
            })
            .collect())
    }
}
