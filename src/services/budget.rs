//! Budget service
//!
//! Evaluates budgets against expense transactions and creates new budgets,
//! enforcing one budget per (category, month).

use tracing::{info, warn};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Budget, BudgetEvaluation, BudgetPeriod, Money, Transaction, TransactionKind, UserId,
};
use crate::reports::aggregation::{by_category, in_period};
use crate::storage::Storage;

/// Evaluate one budget against a user's transactions
///
/// Spent is the sum of expenses in the budget's category and month. The
/// stored `spent` field is ignored.
pub fn evaluate_budget(budget: &Budget, transactions: &[Transaction]) -> BudgetEvaluation {
    let in_month = in_period(transactions, budget.period);
    let spent = by_category(&in_month, TransactionKind::Expense)
        .get(&budget.category)
        .copied()
        .unwrap_or_default();

    BudgetEvaluation::new(budget, spent)
}

/// Evaluate budgets in list order
pub fn evaluate_budgets(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetEvaluation> {
    budgets
        .iter()
        .map(|budget| evaluate_budget(budget, transactions))
        .collect()
}

/// Reject a second budget for the same (category, period)
pub fn ensure_unique(existing: &[Budget], category: &str, period: BudgetPeriod) -> FintrackResult<()> {
    if existing.iter().any(|b| b.same_slot(category, period)) {
        return Err(FintrackError::duplicate_budget(category, period));
    }
    Ok(())
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a budget for a category and month
    ///
    /// The duplicate check runs inside the store's write lock, so two
    /// concurrent creates for the same slot cannot both succeed.
    pub fn create(
        &self,
        user: &UserId,
        category: &str,
        limit: Money,
        period: BudgetPeriod,
    ) -> FintrackResult<Budget> {
        let category = category.trim();
        let budget = Budget::new(user.clone(), category, limit, period);

        if let Err(e) = budget.validate() {
            warn!(%category, %period, error = %e, "rejected budget");
            return Err(FintrackError::Validation(e.to_string()));
        }

        let created = self.storage.budgets.create_checked(budget, |existing| {
            let owned: Vec<Budget> = existing
                .iter()
                .filter(|b| &b.user_id == user)
                .cloned()
                .collect();
            ensure_unique(&owned, category, period).inspect_err(|_| {
                warn!(%category, %period, "rejected duplicate budget");
            })
        })?;
        info!(id = %created.id, %category, %period, limit = %limit, "created budget");
        Ok(created)
    }

    /// Budgets for one month, evaluated against current transactions
    pub fn statuses(&self, user: &UserId, period: BudgetPeriod) -> FintrackResult<Vec<BudgetEvaluation>> {
        let budgets: Vec<Budget> = self
            .storage
            .budgets
            .list(user)?
            .into_iter()
            .filter(|b| b.period == period)
            .collect();
        let transactions = self.storage.transactions.list(user)?;

        Ok(evaluate_budgets(&budgets, &transactions))
    }

    /// Refresh the informational `spent` field on stored budgets for a month
    ///
    /// Evaluation never reads it back; it only keeps the record file
    /// meaningful for other readers.
    pub fn refresh_spent(&self, user: &UserId, period: BudgetPeriod) -> FintrackResult<()> {
        for eval in self.statuses(user, period)? {
            self.storage.budgets.update(user, eval.budget_id, |budget| {
                budget.spent = eval.spent;
                Ok(())
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::BudgetStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: Money, category: &str, on: NaiveDate) -> Transaction {
        Transaction::new(user(), TransactionKind::Expense, amount, category, on)
    }

    fn jan() -> BudgetPeriod {
        BudgetPeriod::new(2025, 1).unwrap()
    }

    #[test]
    fn test_spent_counts_only_category_expenses_in_month() {
        let budget = Budget::new(user(), "Food", Money::from_units(1000), jan());
        let txns = vec![
            expense(Money::new(dec!(500)), "Food", date(2025, 1, 3)),
            expense(Money::new(dec!(300.0001)), "Food", date(2025, 1, 28)),
            expense(Money::from_units(900), "Food", date(2025, 2, 1)),
            expense(Money::from_units(900), "Rent", date(2025, 1, 5)),
            Transaction::new(
                user(),
                TransactionKind::Income,
                Money::from_units(900),
                "Food",
                date(2025, 1, 5),
            ),
        ];

        let eval = evaluate_budget(&budget, &txns);
        assert_eq!(eval.spent, Money::new(dec!(800.0001)));
        assert_eq!(eval.status, BudgetStatus::Near);
    }

    #[test]
    fn test_no_transactions_is_under() {
        let budget = Budget::new(user(), "Food", Money::from_units(1000), jan());
        let eval = evaluate_budget(&budget, &[]);
        assert_eq!(eval.spent, Money::zero());
        assert_eq!(eval.status, BudgetStatus::Under);
    }

    #[test]
    fn test_stored_spent_is_ignored() {
        let mut budget = Budget::new(user(), "Food", Money::from_units(100), jan());
        budget.spent = Money::from_units(5000);
        assert_eq!(evaluate_budget(&budget, &[]).status, BudgetStatus::Under);
    }

    #[test]
    fn test_create_rejects_duplicate_slot() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.create(&user(), "Food", Money::from_units(500), jan()).unwrap();

        let err = service
            .create(&user(), "Food", Money::from_units(700), jan())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(err, FintrackError::Duplicate { .. }));
        assert_eq!(storage.budgets.count().unwrap(), 1);

        // Another month or another user is fine
        service
            .create(&user(), "Food", Money::from_units(500), jan().next())
            .unwrap();
        service
            .create(&UserId::new("user-2").unwrap(), "Food", Money::from_units(500), jan())
            .unwrap();
    }

    #[test]
    fn test_concurrent_creates_for_one_slot() {
        let (_temp_dir, storage) = create_test_storage();

        let results: Vec<FintrackResult<Budget>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let storage = &storage;
                    scope.spawn(move || {
                        BudgetService::new(storage).create(
                            &user(),
                            "Food",
                            Money::from_units(100 + i),
                            jan(),
                        )
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, FintrackError::Duplicate { .. })));
        assert_eq!(storage.budgets.count().unwrap(), 1);
    }

    #[test]
    fn test_create_rejects_invalid_limit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let err = service.create(&user(), "Food", Money::zero(), jan()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(storage.budgets.count().unwrap(), 0);
    }

    #[test]
    fn test_statuses_for_period() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.create(&user(), "Food", Money::from_units(100), jan()).unwrap();
        service.create(&user(), "Rent", Money::from_units(100), jan().next()).unwrap();
        storage
            .transactions
            .create(expense(Money::from_units(127), "Food", date(2025, 1, 9)))
            .unwrap();

        let statuses = service.statuses(&user(), jan()).unwrap();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].status, BudgetStatus::Over);
        assert_eq!(statuses[0].percentage(), 127.0);

        service.refresh_spent(&user(), jan()).unwrap();
        let stored = storage.budgets.list(&user()).unwrap();
        assert_eq!(stored[0].spent, Money::from_units(127));
    }
}
