//! Transaction repository for JSON storage
//!
//! Keeps an account index so balance lookups don't scan the whole ledger.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;

use crate::error::HorizonResult;
use crate::models::{AccountId, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};
use super::{read_lock, write_lock};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with an account index
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: account_id -> transaction_ids
    by_account: RwLock<HashMap<AccountId, Vec<TransactionId>>>,
}

impl TransactionRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_account: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and rebuild the index
    pub fn load(&self) -> HorizonResult<()> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = write_lock(&self.data)?;
        let mut by_account = write_lock(&self.by_account)?;
        data.clear();
        by_account.clear();

        for txn in file_data.transactions {
            by_account.entry(txn.account_id).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> HorizonResult<()> {
        let mut transactions: Vec<_> = read_lock(&self.data)?.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        write_json_atomic(&self.path, &TransactionData { transactions })
    }

    pub fn get(&self, id: TransactionId) -> HorizonResult<Option<Transaction>> {
        Ok(read_lock(&self.data)?.get(&id).cloned())
    }

    /// Find a transaction by full or short ID
    pub fn find(&self, identifier: &str) -> HorizonResult<Option<Transaction>> {
        Ok(read_lock(&self.data)?
            .values()
            .find(|t| t.id.matches(identifier))
            .cloned())
    }

    /// All transactions, newest first
    pub fn get_all(&self) -> HorizonResult<Vec<Transaction>> {
        let mut transactions: Vec<_> = read_lock(&self.data)?.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Transactions for one account, newest first
    pub fn get_by_account(&self, account_id: AccountId) -> HorizonResult<Vec<Transaction>> {
        let data = read_lock(&self.data)?;
        let by_account = read_lock(&self.by_account)?;

        let ids = by_account.get(&account_id).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Transactions dated within `[start, end]`, newest first
    pub fn get_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> HorizonResult<Vec<Transaction>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|t| t.date >= start && t.date <= end)
            .collect())
    }

    pub fn upsert(&self, txn: Transaction) -> HorizonResult<()> {
        let mut data = write_lock(&self.data)?;
        let mut by_account = write_lock(&self.by_account)?;

        if let Some(old) = data.get(&txn.id) {
            if let Some(ids) = by_account.get_mut(&old.account_id) {
                ids.retain(|&id| id != txn.id);
            }
        }

        by_account.entry(txn.account_id).or_default().push(txn.id);
        data.insert(txn.id, txn);
        Ok(())
    }

    pub fn delete(&self, id: TransactionId) -> HorizonResult<bool> {
        let mut data = write_lock(&self.data)?;
        let mut by_account = write_lock(&self.by_account)?;

        match data.remove(&id) {
            Some(txn) => {
                if let Some(ids) = by_account.get_mut(&txn.account_id) {
                    ids.retain(|&tid| tid != id);
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn count(&self) -> HorizonResult<usize> {
        Ok(read_lock(&self.data)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        (temp_dir, repo)
    }

    fn expense(account_id: AccountId, day: u32, cents: i64) -> Transaction {
        Transaction::new(
            account_id,
            NaiveDate::from_ymd_opt(2026, 1, day).unwrap(),
            Money::from_cents(cents),
            TransactionKind::Expense,
        )
    }

    #[test]
    fn test_save_and_reload_rebuilds_index() {
        let (temp_dir, repo) = create_test_repo();
        let account_id = AccountId::new();
        repo.upsert(expense(account_id, 5, 1200)).unwrap();
        repo.upsert(expense(account_id, 6, 800)).unwrap();
        repo.save().unwrap();

        let reloaded = TransactionRepository::new(temp_dir.path().join("transactions.json"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.count().unwrap(), 2);
        assert_eq!(reloaded.get_by_account(account_id).unwrap().len(), 2);
    }

    #[test]
    fn test_upsert_moves_between_accounts() {
        let (_temp_dir, repo) = create_test_repo();
        let first = AccountId::new();
        let second = AccountId::new();
        let mut txn = expense(first, 10, 500);
        repo.upsert(txn.clone()).unwrap();

        txn.account_id = second;
        repo.upsert(txn).unwrap();

        assert!(repo.get_by_account(first).unwrap().is_empty());
        assert_eq!(repo.get_by_account(second).unwrap().len(), 1);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let (_temp_dir, repo) = create_test_repo();
        let account_id = AccountId::new();
        repo.upsert(expense(account_id, 10, 100)).unwrap();
        repo.upsert(expense(account_id, 15, 200)).unwrap();
        repo.upsert(expense(account_id, 20, 300)).unwrap();

        let range = repo
            .get_by_date_range(
                NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            )
            .unwrap();
        assert_eq!(range.len(), 2);
        assert_eq!(range[0].amount.cents(), -300);
    }

    #[test]
    fn test_delete_clears_index() {
        let (_temp_dir, repo) = create_test_repo();
        let account_id = AccountId::new();
        let txn = expense(account_id, 3, 999);
        let id = txn.id;
        repo.upsert(txn).unwrap();

        assert!(repo.delete(id).unwrap());
        assert!(!repo.delete(id).unwrap());
        assert!(repo.get_by_account(account_id).unwrap().is_empty());
    }
}
