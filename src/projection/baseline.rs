//! Baseline calculation
//!
//! The baseline is what the user does today: per-category monthly averages
//! over a trailing window of history, plus the current net worth. Every
//! scenario starts from it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::sources::LedgerReader;
use crate::error::HorizonResult;
use crate::models::month::sub_months;
use crate::models::{CategoryId, Month, TransactionKind};

/// Key of a per-category bucket
///
/// Transactions without a category are averaged into their own bucket, and
/// a configuration without a category targets that bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum CategoryKey {
    Uncategorized,
    Category(CategoryId),
}

const UNCATEGORIZED: &str = "uncategorized";

impl From<Option<CategoryId>> for CategoryKey {
    fn from(category_id: Option<CategoryId>) -> Self {
        category_id.map_or(Self::Uncategorized, Self::Category)
    }
}

impl From<CategoryKey> for String {
    fn from(key: CategoryKey) -> Self {
        match key {
            CategoryKey::Uncategorized => UNCATEGORIZED.to_string(),
            CategoryKey::Category(id) => id.as_uuid().to_string(),
        }
    }
}

impl TryFrom<String> for CategoryKey {
    type Error = uuid::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == UNCATEGORIZED {
            return Ok(Self::Uncategorized);
        }
        Ok(Self::Category(value.parse()?))
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncategorized => write!(f, "{}", UNCATEGORIZED),
            Self::Category(id) => write!(f, "{}", id),
        }
    }
}

/// Historical averages a projection starts from
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaselineData {
    /// Average monthly income per category, in currency units
    pub income_by_category: BTreeMap<CategoryKey, f64>,
    /// Average monthly expense per category, in currency units (positive)
    pub expense_by_category: BTreeMap<CategoryKey, f64>,
    /// `(income - expense) / income`, or 0 without income
    pub savings_rate: f64,
    /// Sum of all account balances as of the calculation day
    pub net_worth: f64,
    /// Distinct months with income or expense activity in the window
    pub months_observed: u32,
    pub window_start: Option<NaiveDate>,
    pub window_end: Option<NaiveDate>,
}

impl BaselineData {
    pub fn total_income(&self) -> f64 {
        self.income_by_category.values().sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.expense_by_category.values().sum()
    }

    pub fn monthly_savings(&self) -> f64 {
        self.total_income() - self.total_expense()
    }
}

/// Computes the baseline over a trailing window of history
#[derive(Debug, Clone, Copy)]
pub struct BaselineCalculator {
    months: u32,
}

impl Default for BaselineCalculator {
    fn default() -> Self {
        Self { months: 6 }
    }
}

impl BaselineCalculator {
    /// Average over the trailing `months` months (at least one)
    pub fn new(months: u32) -> Self {
        Self { months: months.max(1) }
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    /// Compute the baseline as of `today`
    ///
    /// A category's average is its total across the window divided by the
    /// number of months that saw any income or expense, so a month in which
    /// the category is absent counts as zero. Months with spending but no
    /// income count too; the divisor is not limited to income months.
    /// Accounts whose balance cannot be computed are skipped with a warning.
    pub fn compute(&self, ledger: &dyn LedgerReader, today: NaiveDate) -> HorizonResult<BaselineData> {
        let start = sub_months(today, self.months);
        let transactions = ledger.list_transactions(start, today)?;

        let mut income_totals: BTreeMap<CategoryKey, f64> = BTreeMap::new();
        let mut expense_totals: BTreeMap<CategoryKey, f64> = BTreeMap::new();
        let mut months: BTreeSet<Month> = BTreeSet::new();

        for txn in transactions.iter().filter(|t| t.date >= start && t.date <= today) {
            let totals = match txn.kind {
                TransactionKind::Income => &mut income_totals,
                TransactionKind::Expense => &mut expense_totals,
                TransactionKind::Transfer => continue,
            };
            *totals.entry(CategoryKey::from(txn.category_id)).or_insert(0.0) += txn.amount.abs().as_units();
            months.insert(Month::of(txn.date));
        }

        let months_observed = months.len().max(1) as u32;
        let divisor = f64::from(months_observed);
        let average = |totals: BTreeMap<CategoryKey, f64>| -> BTreeMap<CategoryKey, f64> {
            totals.into_iter().map(|(key, total)| (key, total / divisor)).collect()
        };

        let mut baseline = BaselineData {
            income_by_category: average(income_totals),
            expense_by_category: average(expense_totals),
            savings_rate: 0.0,
            net_worth: 0.0,
            months_observed,
            window_start: Some(start),
            window_end: Some(today),
        };

        let income = baseline.total_income();
        if income > 0.0 {
            baseline.savings_rate = (income - baseline.total_expense()) / income;
        }

        for account in ledger.list_accounts()? {
            match ledger.balance_as_of(account.id, today) {
                Ok(balance) => baseline.net_worth += balance.as_units(),
                Err(e) => log::warn!("Skipping account {} in net worth: {}", account.name, e),
            }
        }

        log::debug!(
            "Baseline {}..{}: {} months, income {:.2}, expense {:.2}, net worth {:.2}",
            start,
            today,
            months_observed,
            income,
            baseline.total_expense(),
            baseline.net_worth
        );

        Ok(baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HorizonError;
    use crate::models::{Account, AccountId, AccountType, Money, Transaction};
    use approx::assert_relative_eq;

    struct FakeLedger {
        accounts: Vec<Account>,
        transactions: Vec<Transaction>,
        broken: Option<AccountId>,
    }

    impl LedgerReader for FakeLedger {
        fn list_transactions(&self, start: NaiveDate, end: NaiveDate) -> HorizonResult<Vec<Transaction>> {
            Ok(self
                .transactions
                .iter()
                .filter(|t| t.date >= start && t.date <= end)
                .cloned()
                .collect())
        }

        fn list_accounts(&self) -> HorizonResult<Vec<Account>> {
            Ok(self.accounts.clone())
        }

        fn balance_as_of(&self, account_id: AccountId, date: NaiveDate) -> HorizonResult<Money> {
            if self.broken == Some(account_id) {
                return Err(HorizonError::Storage("unreadable".into()));
            }
            let account = self
                .accounts
                .iter()
                .find(|a| a.id == account_id)
                .ok_or_else(|| HorizonError::account_not_found(account_id.to_string()))?;
            Ok(account.balance_as_of(&self.transactions, date))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(
        account: &Account,
        day: NaiveDate,
        cents: i64,
        kind: TransactionKind,
        category: Option<CategoryId>,
    ) -> Transaction {
        Transaction::with_details(account.id, day, Money::from_cents(cents), kind, category, "")
    }

    #[test]
    fn test_averages_over_active_months() {
        let account = Account::new("Checking", AccountType::Checking);
        let salary = CategoryId::new();
        let rent = CategoryId::new();
        let ledger = FakeLedger {
            transactions: vec![
                txn(&account, date(2026, 8, 5), 300_000, TransactionKind::Income, Some(salary)),
                txn(&account, date(2026, 9, 5), 300_000, TransactionKind::Income, Some(salary)),
                txn(&account, date(2026, 8, 1), 120_000, TransactionKind::Expense, Some(rent)),
                // Rent missing in September counts as a zero month
                txn(&account, date(2026, 9, 12), 5_000, TransactionKind::Expense, None),
                txn(&account, date(2026, 9, 20), 50_000, TransactionKind::Transfer, None),
                // Outside the trailing window
                txn(&account, date(2026, 1, 5), 999_900, TransactionKind::Income, Some(salary)),
            ],
            accounts: vec![account.clone()],
            broken: None,
        };

        let baseline = BaselineCalculator::new(6)
            .compute(&ledger, date(2026, 10, 18))
            .unwrap();

        assert_eq!(baseline.months_observed, 2);
        assert_relative_eq!(baseline.income_by_category[&CategoryKey::Category(salary)], 3_000.0);
        assert_relative_eq!(baseline.expense_by_category[&CategoryKey::Category(rent)], 600.0);
        assert_relative_eq!(baseline.expense_by_category[&CategoryKey::Uncategorized], 25.0);
        assert_relative_eq!(baseline.savings_rate, (3_000.0 - 625.0) / 3_000.0);
        assert_eq!(baseline.window_start, Some(date(2026, 4, 18)));
    }

    #[test]
    fn test_empty_history() {
        let ledger = FakeLedger {
            accounts: Vec::new(),
            transactions: Vec::new(),
            broken: None,
        };
        let baseline = BaselineCalculator::default()
            .compute(&ledger, date(2026, 10, 18))
            .unwrap();

        assert!(baseline.income_by_category.is_empty());
        assert_eq!(baseline.months_observed, 1);
        assert_eq!(baseline.savings_rate, 0.0);
        assert_eq!(baseline.net_worth, 0.0);
    }

    #[test]
    fn test_net_worth_skips_failing_account() {
        let good =
            Account::with_opening_balance("Savings", AccountType::Savings, Money::from_cents(150_050));
        let bad = Account::with_opening_balance("Broken", AccountType::Cash, Money::from_cents(1_000));
        let ledger = FakeLedger {
            broken: Some(bad.id),
            accounts: vec![good, bad],
            transactions: Vec::new(),
        };

        let baseline = BaselineCalculator::default()
            .compute(&ledger, date(2026, 10, 18))
            .unwrap();
        assert_relative_eq!(baseline.net_worth, 1_500.50);
    }

    #[test]
    fn test_category_key_serializes_as_string() {
        let id = CategoryId::new();
        let mut map = BTreeMap::new();
        map.insert(CategoryKey::Uncategorized, 1.0);
        map.insert(CategoryKey::Category(id), 2.0);

        let json = serde_json::to_string(&map).unwrap();
        assert!(json.contains("\"uncategorized\":1.0"));
        assert!(json.contains(&id.as_uuid().to_string()));

        let back: BTreeMap<CategoryKey, f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
