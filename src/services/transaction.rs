//! Transaction service
//!
//! Records the history the baseline is derived from.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{HorizonError, HorizonResult};
use crate::models::{
    AccountId, CategoryId, CategoryKind, Money, Transaction, TransactionId, TransactionKind,
};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub account_id: Option<AccountId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub account_id: AccountId,
    pub date: NaiveDate,
    /// Sign is taken from `kind` for income and expense
    pub amount: Money,
    pub kind: TransactionKind,
    pub category_id: Option<CategoryId>,
    pub description: Option<String>,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> HorizonResult<Transaction> {
        let account = self
            .storage
            .accounts
            .get(input.account_id)?
            .ok_or_else(|| HorizonError::account_not_found(input.account_id.to_string()))?;

        if account.archived {
            return Err(HorizonError::Validation(
                "Cannot add transactions to an archived account".into(),
            ));
        }

        if let Some(category_id) = input.category_id {
            let category = self
                .storage
                .categories
                .get(category_id)?
                .ok_or_else(|| HorizonError::category_not_found(category_id.to_string()))?;

            let expected = match input.kind {
                TransactionKind::Income => Some(CategoryKind::Income),
                TransactionKind::Expense => Some(CategoryKind::Expense),
                TransactionKind::Transfer => None,
            };
            match expected {
                None => {
                    return Err(HorizonError::Validation(
                        "Transfers cannot be categorized".into(),
                    ))
                }
                Some(kind) if kind != category.kind => {
                    return Err(HorizonError::Validation(format!(
                        "Category '{}' is an {} category and cannot hold {} transactions",
                        category.name,
                        category.kind.to_string().to_lowercase(),
                        input.kind.to_string().to_lowercase()
                    )))
                }
                Some(_) => {}
            }
        }

        let txn = Transaction::with_details(
            input.account_id,
            input.date,
            input.amount,
            input.kind,
            input.category_id,
            input.description.unwrap_or_default().trim(),
        );
        txn.validate()
            .map_err(|e| HorizonError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {}", txn.date, txn.description)),
            &txn,
        )?;

        Ok(txn)
    }

    pub fn get(&self, id: TransactionId) -> HorizonResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full or short ID
    pub fn find(&self, identifier: &str) -> HorizonResult<Option<Transaction>> {
        self.storage.transactions.find(identifier)
    }

    /// List transactions, newest first
    pub fn list(&self, filter: TransactionFilter) -> HorizonResult<Vec<Transaction>> {
        let mut transactions = match filter.account_id {
            Some(account_id) => self.storage.transactions.get_by_account(account_id)?,
            None => self.storage.transactions.get_all()?,
        };

        if let Some(start) = filter.start_date {
            transactions.retain(|t| t.date >= start);
        }
        if let Some(end) = filter.end_date {
            transactions.retain(|t| t.date <= end);
        }
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> HorizonResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| HorizonError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            id.to_string(),
            Some(format!("{} {}", txn.date, txn.description)),
            &txn,
        )?;

        Ok(txn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HorizonPaths;
    use crate::models::AccountType;
    use crate::services::{AccountService, CategoryService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = HorizonPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(account_id: AccountId, cents: i64, kind: TransactionKind) -> CreateTransactionInput {
        CreateTransactionInput {
            account_id,
            date: NaiveDate::from_ymd_opt(2026, 5, 10).unwrap(),
            amount: Money::from_cents(cents),
            kind,
            category_id: None,
            description: Some("Test".into()),
        }
    }

    #[test]
    fn test_create_normalizes_sign() {
        let (_temp_dir, storage) = create_test_storage();
        let account = AccountService::new(&storage)
            .create("Checking", AccountType::Checking, Money::zero())
            .unwrap();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input(account.id, 4_250, TransactionKind::Expense))
            .unwrap();
        assert_eq!(txn.amount.cents(), -4_250);
        assert_eq!(service.list(TransactionFilter::new()).unwrap().len(), 1);
    }

    #[test]
    fn test_category_kind_must_match() {
        let (_temp_dir, storage) = create_test_storage();
        let account = AccountService::new(&storage)
            .create("Checking", AccountType::Checking, Money::zero())
            .unwrap();
        let salary = CategoryService::new(&storage)
            .create("Salary", CategoryKind::Income)
            .unwrap();
        let service = TransactionService::new(&storage);

        let mut wrong = input(account.id, 1_000, TransactionKind::Expense);
        wrong.category_id = Some(salary.id);
        assert!(service.create(wrong).unwrap_err().is_validation());

        let mut right = input(account.id, 1_000, TransactionKind::Income);
        right.category_id = Some(salary.id);
        assert!(service.create(right).is_ok());
    }

    #[test]
    fn test_unknown_account_and_zero_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);
        assert!(service
            .create(input(AccountId::new(), 100, TransactionKind::Income))
            .unwrap_err()
            .is_not_found());

        let account = AccountService::new(&storage)
            .create("Cash", AccountType::Cash, Money::zero())
            .unwrap();
        assert!(service
            .create(input(account.id, 0, TransactionKind::Income))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let account = AccountService::new(&storage)
            .create("Checking", AccountType::Checking, Money::zero())
            .unwrap();
        let service = TransactionService::new(&storage);
        let txn = service
            .create(input(account.id, 500, TransactionKind::Income))
            .unwrap();

        service.delete(txn.id).unwrap();
        assert!(service.get(txn.id).unwrap().is_none());
        assert!(service.delete(txn.id).unwrap_err().is_not_found());
    }
}
