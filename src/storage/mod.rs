//! Storage layer for Horizon
//!
//! JSON file repositories with atomic writes, plus the `Storage`
//! coordinator that owns them and records every change in the audit log.

pub mod accounts;
pub mod categories;
pub mod configurations;
pub mod file_io;
pub mod goals;
pub mod init;
pub mod scenarios;
pub mod transactions;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

pub use accounts::AccountRepository;
pub use categories::CategoryRepository;
pub use configurations::ConfigurationRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use init::initialize_storage;
pub use scenarios::ScenarioRepository;
pub use transactions::TransactionRepository;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::HorizonPaths;
use crate::error::{HorizonError, HorizonResult};

pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> HorizonResult<RwLockReadGuard<'_, T>> {
    lock.read()
        .map_err(|e| HorizonError::Storage(format!("Failed to acquire read lock: {}", e)))
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> HorizonResult<RwLockWriteGuard<'_, T>> {
    lock.write()
        .map_err(|e| HorizonError::Storage(format!("Failed to acquire write lock: {}", e)))
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: HorizonPaths,
    audit: AuditLogger,
    pub accounts: AccountRepository,
    pub categories: CategoryRepository,
    pub transactions: TransactionRepository,
    pub scenarios: ScenarioRepository,
    pub configurations: ConfigurationRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance; nothing is read until `load_all`
    pub fn new(paths: HorizonPaths) -> HorizonResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            accounts: AccountRepository::new(paths.accounts_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            scenarios: ScenarioRepository::new(paths.scenarios_file()),
            configurations: ConfigurationRepository::new(paths.configurations_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &HorizonPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&self) -> HorizonResult<()> {
        self.accounts.load()?;
        self.categories.load()?;
        self.transactions.load()?;
        self.scenarios.load()?;
        self.configurations.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> HorizonResult<()> {
        self.accounts.save()?;
        self.categories.save()?;
        self.transactions.save()?;
        self.scenarios.save()?;
        self.configurations.save()?;
        self.goals.save()?;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Record a created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> HorizonResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an updated entity with a field-level diff
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> HorizonResult<()> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff,
        ))
    }

    /// Record a deleted entity in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> HorizonResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
