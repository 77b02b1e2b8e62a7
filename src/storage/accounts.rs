//! Account repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::HorizonResult;
use crate::models::{Account, AccountId};

use super::file_io::{read_json, write_json_atomic};
use super::{read_lock, write_lock};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct AccountData {
    accounts: Vec<Account>,
}

/// Repository for account persistence
pub struct AccountRepository {
    path: PathBuf,
    data: RwLock<HashMap<AccountId, Account>>,
}

impl AccountRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load accounts from disk
    pub fn load(&self) -> HorizonResult<()> {
        let file_data: AccountData = read_json(&self.path)?;
        let mut data = write_lock(&self.data)?;
        data.clear();
        for account in file_data.accounts {
            data.insert(account.id, account);
        }
        Ok(())
    }

    /// Save accounts to disk
    pub fn save(&self) -> HorizonResult<()> {
        let accounts = self.get_all()?;
        write_json_atomic(&self.path, &AccountData { accounts })
    }

    pub fn get(&self, id: AccountId) -> HorizonResult<Option<Account>> {
        Ok(read_lock(&self.data)?.get(&id).cloned())
    }

    /// Get all accounts, sorted by name
    pub fn get_all(&self) -> HorizonResult<Vec<Account>> {
        let mut accounts: Vec<_> = read_lock(&self.data)?.values().cloned().collect();
        accounts.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(accounts)
    }

    /// Get all non-archived accounts
    pub fn get_active(&self) -> HorizonResult<Vec<Account>> {
        Ok(self.get_all()?.into_iter().filter(|a| !a.archived).collect())
    }

    /// Find an account by ID (full or short form) or by name (case-insensitive)
    pub fn find(&self, identifier: &str) -> HorizonResult<Option<Account>> {
        let data = read_lock(&self.data)?;
        if let Some(account) = data.values().find(|a| a.id.matches(identifier)) {
            return Ok(Some(account.clone()));
        }
        let name_lower = identifier.trim().to_lowercase();
        Ok(data
            .values()
            .find(|a| a.name.to_lowercase() == name_lower)
            .cloned())
    }

    pub fn upsert(&self, account: Account) -> HorizonResult<()> {
        write_lock(&self.data)?.insert(account.id, account);
        Ok(())
    }

    pub fn delete(&self, id: AccountId) -> HorizonResult<bool> {
        Ok(write_lock(&self.data)?.remove(&id).is_some())
    }

    pub fn exists(&self, id: AccountId) -> HorizonResult<bool> {
        Ok(read_lock(&self.data)?.contains_key(&id))
    }

    /// Check if an account name is already taken
    pub fn name_exists(&self, name: &str, exclude_id: Option<AccountId>) -> HorizonResult<bool> {
        let name_lower = name.trim().to_lowercase();
        Ok(read_lock(&self.data)?
            .values()
            .any(|a| a.name.to_lowercase() == name_lower && Some(a.id) != exclude_id))
    }

    pub fn count(&self) -> HorizonResult<usize> {
        Ok(read_lock(&self.data)?.len())
    }
}
