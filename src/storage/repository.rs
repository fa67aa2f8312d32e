//! Generic JSON-file record repository
//!
//! Each record type lives in its own file. Records are kept in insertion
//! order and every mutating call persists the whole file atomically while it
//! still holds the write lock, so concurrent writers never interleave.

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::debug;

use super::file_io::{read_json, write_json_atomic};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{Budget, FinancialGoal, Investment, Transaction, UserId};
use crate::models::{BudgetId, GoalId, InvestmentId, TransactionId};

/// A record the store can persist
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + Display;

    /// Name used in errors and logs
    const ENTITY: &'static str;

    fn id(&self) -> Self::Id;

    fn user_id(&self) -> &UserId;
}

impl Record for Transaction {
    type Id = TransactionId;
    const ENTITY: &'static str = "Transaction";

    fn id(&self) -> TransactionId {
        self.id
    }

    fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

impl Record for Budget {
    type Id = BudgetId;
    const ENTITY: &'static str = "Budget";

    fn id(&self) -> BudgetId {
        self.id
    }

    fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

impl Record for Investment {
    type Id = InvestmentId;
    const ENTITY: &'static str = "Investment";

    fn id(&self) -> InvestmentId {
        self.id
    }

    fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

impl Record for FinancialGoal {
    type Id = GoalId;
    const ENTITY: &'static str = "Goal";

    fn id(&self) -> GoalId {
        self.id
    }

    fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// On-disk layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordFile<T> {
    #[serde(default = "default_schema_version")]
    schema_version: u32,
    records: Vec<T>,
}

fn default_schema_version() -> u32 {
    1
}

impl<T> Default for RecordFile<T> {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            records: Vec::new(),
        }
    }
}

/// Repository for one record type
pub struct JsonRepository<T: Record> {
    path: PathBuf,
    data: RwLock<Vec<T>>,
}

impl<T: Record> JsonRepository<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load records from disk, replacing anything in memory
    pub fn load(&self) -> FintrackResult<()> {
        let file: RecordFile<T> = read_json(&self.path)?;
        debug!(entity = T::ENTITY, count = file.records.len(), path = %self.path.display(), "loaded records");

        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file.records;
        Ok(())
    }

    /// Persist all records to disk
    pub fn save(&self) -> FintrackResult<()> {
        let data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        self.persist(&data)
    }

    fn persist(&self, records: &[T]) -> FintrackResult<()> {
        let file = RecordFile {
            schema_version: default_schema_version(),
            records: records.to_vec(),
        };
        write_json_atomic(&self.path, &file)?;
        debug!(entity = T::ENTITY, count = records.len(), "saved records");
        Ok(())
    }

    /// Insert a new record and persist
    pub fn create(&self, record: T) -> FintrackResult<T> {
        self.create_checked(record, |_| Ok(()))
    }

    /// Insert a new record after `check` accepts the current contents
    ///
    /// `check` sees every stored record and runs under the same write lock as
    /// the insert, so no other writer can slip in between the two. A failed
    /// check or save leaves the store as it was.
    pub fn create_checked<F>(&self, record: T, check: F) -> FintrackResult<T>
    where
        F: FnOnce(&[T]) -> FintrackResult<()>,
    {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data.iter().any(|r| r.id() == record.id()) {
            return Err(FintrackError::Duplicate {
                entity_type: T::ENTITY,
                identifier: record.id().to_string(),
            });
        }
        check(&data)?;

        data.push(record.clone());
        if let Err(e) = self.persist(&data) {
            data.pop();
            return Err(e);
        }
        Ok(record)
    }

    /// All records owned by `user`, in insertion order
    pub fn list(&self, user: &UserId) -> FintrackResult<Vec<T>> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data.iter().filter(|r| r.user_id() == user).cloned().collect())
    }

    /// A record by id, only if owned by `user`
    pub fn get(&self, user: &UserId, id: T::Id) -> FintrackResult<Option<T>> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .iter()
            .find(|r| r.id() == id && r.user_id() == user)
            .cloned())
    }

    /// Apply `change` to a user's record and persist the result
    pub fn update<F>(&self, user: &UserId, id: T::Id, change: F) -> FintrackResult<T>
    where
        F: FnOnce(&mut T) -> FintrackResult<()>,
    {
        let mut data = self.data.write().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let record = data
            .iter_mut()
            .find(|r| r.id() == id && r.user_id() == user)
            .ok_or_else(|| FintrackError::NotFound {
                entity_type: T::ENTITY,
                identifier: id.to_string(),
            })?;

        let mut candidate = record.clone();
        change(&mut candidate)?;
        *record = candidate.clone();

        self.persist(&data)?;
        Ok(candidate)
    }

    /// Number of records across all users
    pub fn count(&self) -> FintrackResult<usize> {
        let data = self.data.read().map_err(|e| {
            FintrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn user(id: &str) -> UserId {
        UserId::new(id).unwrap()
    }

    fn txn(owner: &str, units: i64) -> Transaction {
        Transaction::new(
            user(owner),
            TransactionKind::Expense,
            Money::from_units(units),
            "Food",
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
        )
    }

    fn repo(dir: &TempDir) -> JsonRepository<Transaction> {
        JsonRepository::new(dir.path().join("transactions.json"))
    }

    fn repo_from_disk(dir: &TempDir) -> JsonRepository<Transaction> {
        let repo = repo(dir);
        repo.load().unwrap();
        repo
    }

    #[test]
    fn test_create_and_list_scoped_by_user() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);

        repo.create(txn("alice", 10)).unwrap();
        repo.create(txn("bob", 20)).unwrap();
        repo.create(txn("alice", 30)).unwrap();

        let alice = repo.list(&user("alice")).unwrap();
        assert_eq!(alice.len(), 2);
        assert_eq!(alice[0].amount, Money::from_units(10));
        assert_eq!(alice[1].amount, Money::from_units(30));
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let created = repo(&temp_dir).create(txn("alice", 10)).unwrap();

        let reopened = repo(&temp_dir);
        reopened.load().unwrap();
        let found = reopened.get(&user("alice"), created.id).unwrap();
        assert_eq!(found, Some(created));
    }

    #[test]
    fn test_get_hides_other_users_records() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let created = repo.create(txn("alice", 10)).unwrap();

        assert!(repo.get(&user("bob"), created.id).unwrap().is_none());
    }

    #[test]
    fn test_update() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let created = repo.create(txn("alice", 10)).unwrap();

        let updated = repo
            .update(&user("alice"), created.id, |t| {
                t.description = "Lunch".into();
                Ok(())
            })
            .unwrap();
        assert_eq!(updated.description, "Lunch");

        let err = repo
            .update(&user("bob"), created.id, |_| Ok(()))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_failed_update_leaves_record_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let created = repo.create(txn("alice", 10)).unwrap();

        let result = repo.update(&user("alice"), created.id, |t| {
            t.description = "Lunch".into();
            Err(FintrackError::Validation("nope".into()))
        });
        assert!(result.is_err());

        let stored = repo.get(&user("alice"), created.id).unwrap().unwrap();
        assert_eq!(stored.description, "");
    }

    #[test]
    fn test_create_checked_runs_check_before_insert() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        repo.create(txn("alice", 10)).unwrap();

        let err = repo
            .create_checked(txn("alice", 20), |existing| {
                assert_eq!(existing.len(), 1);
                Err(FintrackError::Validation("rejected".into()))
            })
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(repo.count().unwrap(), 1);

        let reopened = repo_from_disk(&temp_dir);
        assert_eq!(reopened.count().unwrap(), 1);

        repo.create_checked(txn("alice", 30), |_| Ok(())).unwrap();
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repo(&temp_dir);
        let created = repo.create(txn("alice", 10)).unwrap();

        assert!(repo.create(created).is_err());
    }
}
