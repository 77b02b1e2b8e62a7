//! Account service
//!
//! Business logic for accounts: creation, lookup, reference balances and
//! balance calculation as of a given day.

use chrono::{NaiveDate, Utc};

use crate::audit::EntityType;
use crate::error::{HorizonError, HorizonResult};
use crate::models::{Account, AccountId, AccountType, Money};
use crate::storage::Storage;

/// Service for account management
pub struct AccountService<'a> {
    storage: &'a Storage,
}

/// An account with its balance on a given day
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub account: Account,
    pub balance: Money,
}

impl<'a> AccountService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new account with an opening balance
    pub fn create(
        &self,
        name: &str,
        account_type: AccountType,
        opening_balance: Money,
    ) -> HorizonResult<Account> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HorizonError::Validation("Account name cannot be empty".into()));
        }

        if self.storage.accounts.name_exists(name, None)? {
            return Err(HorizonError::Duplicate {
                entity_type: "Account",
                identifier: name.to_string(),
            });
        }

        let account = Account::with_opening_balance(name, account_type, opening_balance);
        account
            .validate()
            .map_err(|e| HorizonError::Validation(e.to_string()))?;

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_create(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &account,
        )?;

        Ok(account)
    }

    pub fn get(&self, id: AccountId) -> HorizonResult<Option<Account>> {
        self.storage.accounts.get(id)
    }

    /// Find an account by name or ID string
    pub fn find(&self, identifier: &str) -> HorizonResult<Option<Account>> {
        self.storage.accounts.find(identifier)
    }

    pub fn list(&self, include_archived: bool) -> HorizonResult<Vec<Account>> {
        if include_archived {
            self.storage.accounts.get_all()
        } else {
            self.storage.accounts.get_active()
        }
    }

    /// List accounts with their balances as of `date`
    pub fn list_with_balances(
        &self,
        include_archived: bool,
        date: NaiveDate,
    ) -> HorizonResult<Vec<AccountSummary>> {
        self.list(include_archived)?
            .into_iter()
            .map(|account| {
                let balance = self.balance_of(&account, date)?;
                Ok(AccountSummary { account, balance })
            })
            .collect()
    }

    /// Balance of an account at the end of `date`
    pub fn balance_as_of(&self, id: AccountId, date: NaiveDate) -> HorizonResult<Money> {
        let account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| HorizonError::account_not_found(id.to_string()))?;
        self.balance_of(&account, date)
    }

    fn balance_of(&self, account: &Account, date: NaiveDate) -> HorizonResult<Money> {
        let transactions = self.storage.transactions.get_by_account(account.id)?;
        Ok(account.balance_as_of(&transactions, date))
    }

    /// Anchor an account to a known balance, optionally on a given day
    pub fn set_reference_balance(
        &self,
        id: AccountId,
        balance: Money,
        date: Option<NaiveDate>,
    ) -> HorizonResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| HorizonError::account_not_found(id.to_string()))?;

        let before = account.clone();
        account.set_reference(balance, date);

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_update(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &before,
            &account,
        )?;

        Ok(account)
    }

    /// Archive an account (soft delete)
    pub fn archive(&self, id: AccountId) -> HorizonResult<Account> {
        let mut account = self
            .storage
            .accounts
            .get(id)?
            .ok_or_else(|| HorizonError::account_not_found(id.to_string()))?;

        if account.archived {
            return Err(HorizonError::Validation("Account is already archived".into()));
        }

        let before = account.clone();
        account.archive();
        account.updated_at = Utc::now();

        self.storage.accounts.upsert(account.clone())?;
        self.storage.accounts.save()?;

        self.storage.log_update(
            EntityType::Account,
            account.id.to_string(),
            Some(account.name.clone()),
            &before,
            &account,
        )?;

        Ok(account)
    }
}
