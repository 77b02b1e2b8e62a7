//! Read seams consumed by the projection engine
//!
//! The engine never touches storage directly. It reads the ledger and the
//! plan records through these two traits, which `Storage` implements and
//! tests replace with in-memory fakes.

use chrono::NaiveDate;

use crate::error::{HorizonError, HorizonResult};
use crate::models::{
    Account, AccountId, BehaviorConfiguration, FinancialGoal, Money, Scenario, ScenarioId,
    Transaction,
};
use crate::storage::Storage;

/// Read access to recorded history
pub trait LedgerReader {
    /// Transactions dated within `[start, end]`
    fn list_transactions(&self, start: NaiveDate, end: NaiveDate) -> HorizonResult<Vec<Transaction>>;

    /// Open accounts; archived ones no longer count toward net worth
    fn list_accounts(&self) -> HorizonResult<Vec<Account>>;

    /// Balance of an account at the end of `date`, honoring its reference balance
    fn balance_as_of(&self, account_id: AccountId, date: NaiveDate) -> HorizonResult<Money>;
}

/// Read access to plan records
pub trait PlanReader {
    fn get_scenario(&self, id: ScenarioId) -> HorizonResult<Scenario>;

    /// Configurations of a scenario, in the order they were added
    fn list_configurations(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<BehaviorConfiguration>>;

    fn list_goals(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<FinancialGoal>>;
}

impl LedgerReader for Storage {
    fn list_transactions(&self, start: NaiveDate, end: NaiveDate) -> HorizonResult<Vec<Transaction>> {
        self.transactions.get_by_date_range(start, end)
    }

    fn list_accounts(&self) -> HorizonResult<Vec<Account>> {
        self.accounts.get_active()
    }

    fn balance_as_of(&self, account_id: AccountId, date: NaiveDate) -> HorizonResult<Money> {
        let account = self
            .accounts
            .get(account_id)?
            .ok_or_else(|| HorizonError::account_not_found(account_id.to_string()))?;
        let transactions = self.transactions.get_by_account(account_id)?;
        Ok(account.balance_as_of(&transactions, date))
    }
}

impl PlanReader for Storage {
    fn get_scenario(&self, id: ScenarioId) -> HorizonResult<Scenario> {
        self.scenarios
            .get(id)?
            .ok_or_else(|| HorizonError::scenario_not_found(id.to_string()))
    }

    fn list_configurations(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<BehaviorConfiguration>> {
        self.configurations.get_by_scenario(scenario_id)
    }

    fn list_goals(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<FinancialGoal>> {
        self.goals.get_by_scenario(scenario_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::HorizonPaths;
    use crate::models::{AccountType, TransactionKind};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = HorizonPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_ledger_reader() {
        let (_temp_dir, storage) = create_test_storage();
        let day = |d| NaiveDate::from_ymd_opt(2026, 4, d).unwrap();

        let account =
            Account::with_opening_balance("Checking", AccountType::Checking, Money::from_cents(10_000));
        storage.accounts.upsert(account.clone()).unwrap();
        storage
            .transactions
            .upsert(Transaction::new(account.id, day(3), Money::from_cents(2_500), TransactionKind::Expense))
            .unwrap();
        storage
            .transactions
            .upsert(Transaction::new(account.id, day(20), Money::from_cents(1_000), TransactionKind::Income))
            .unwrap();

        let ledger: &dyn LedgerReader = &storage;
        assert_eq!(ledger.list_accounts().unwrap().len(), 1);
        assert_eq!(ledger.list_transactions(day(1), day(10)).unwrap().len(), 1);
        assert_eq!(ledger.balance_as_of(account.id, day(10)).unwrap().cents(), 7_500);
        assert!(ledger
            .balance_as_of(AccountId::new(), day(10))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_archived_accounts_are_not_listed() {
        let (_temp_dir, storage) = create_test_storage();
        let open =
            Account::with_opening_balance("Checking", AccountType::Checking, Money::from_cents(100_000));
        let mut closed =
            Account::with_opening_balance("Savings", AccountType::Savings, Money::from_cents(500_000));
        closed.archive();
        storage.accounts.upsert(open.clone()).unwrap();
        storage.accounts.upsert(closed).unwrap();

        let accounts = LedgerReader::list_accounts(&storage).unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].id, open.id);
    }

    #[test]
    fn test_storage_plan_reader_missing_scenario() {
        let (_temp_dir, storage) = create_test_storage();
        let plans: &dyn PlanReader = &storage;
        assert!(plans.get_scenario(ScenarioId::new()).unwrap_err().is_not_found());
        assert!(plans.list_goals(ScenarioId::new()).unwrap().is_empty());
    }
}
