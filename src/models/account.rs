//! Account model
//!
//! Represents financial accounts whose balances feed the net worth at the
//! start of every projection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;
use super::transaction::Transaction;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    Checking,
    Savings,
    Credit,
    Cash,
    Investment,
    Other,
}

impl AccountType {
    /// Returns true if this account normally carries a negative balance
    pub fn is_liability(&self) -> bool {
        matches!(self, Self::Credit)
    }

    /// Parse account type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "cash" => Some(Self::Cash),
            "investment" => Some(Self::Investment),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Cash => write!(f, "Cash"),
            Self::Investment => write!(f, "Investment"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A financial account
///
/// The balance is anchored on a user-set reference balance. When a
/// reference date is present, the reference balance is the known balance at
/// the end of that day and transactions are applied forward or backward from
/// it; without one, the reference balance is an opening balance and every
/// transaction counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,

    /// Account name (e.g., "Main Checking")
    pub name: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Whether this account is archived (soft-deleted)
    #[serde(default)]
    pub archived: bool,

    /// Known balance at `reference_date` (or opening balance if no date)
    pub reference_balance: Money,

    /// Day on which `reference_balance` was observed
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,

    #[serde(default)]
    pub notes: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a zero opening balance
    pub fn new(name: impl Into<String>, account_type: AccountType) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            account_type,
            archived: false,
            reference_balance: Money::zero(),
            reference_date: None,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new account with an opening balance
    pub fn with_opening_balance(
        name: impl Into<String>,
        account_type: AccountType,
        balance: Money,
    ) -> Self {
        let mut account = Self::new(name, account_type);
        account.reference_balance = balance;
        account
    }

    /// Anchor the balance to a known value on a given day
    pub fn set_reference(&mut self, balance: Money, date: Option<NaiveDate>) {
        self.reference_balance = balance;
        self.reference_date = date;
        self.updated_at = Utc::now();
    }

    /// Archive this account
    pub fn archive(&mut self) {
        self.archived = true;
        self.updated_at = Utc::now();
    }

    /// Balance at the end of `date`, given this account's transactions
    ///
    /// Transactions belonging to other accounts are ignored.
    pub fn balance_as_of(&self, transactions: &[Transaction], date: NaiveDate) -> Money {
        let own = transactions.iter().filter(|t| t.account_id == self.id);

        match self.reference_date {
            None => {
                self.reference_balance
                    + own.filter(|t| t.date <= date).map(|t| t.amount).sum::<Money>()
            }
            Some(reference) if date >= reference => {
                self.reference_balance
                    + own
                        .filter(|t| t.date > reference && t.date <= date)
                        .map(|t| t.amount)
                        .sum::<Money>()
            }
            Some(reference) => {
                self.reference_balance
                    - own
                        .filter(|t| t.date > date && t.date <= reference)
                        .map(|t| t.amount)
                        .sum::<Money>()
            }
        }
    }

    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    #[test]
    fn test_new_account() {
        let account = Account::new("Checking", AccountType::Checking);
        assert_eq!(account.name, "Checking");
        assert!(!account.archived);
        assert_eq!(account.reference_balance, Money::zero());
        assert!(account.reference_date.is_none());
    }

    #[test]
    fn test_set_reference() {
        let mut account = Account::new("Savings", AccountType::Savings);
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        account.set_reference(Money::from_cents(250_000), Some(date));
        assert_eq!(account.reference_balance.cents(), 250_000);
        assert_eq!(account.reference_date, Some(date));
    }

    #[test]
    fn test_balance_as_of_opening_balance() {
        let account =
            Account::with_opening_balance("Checking", AccountType::Checking, Money::from_cents(10_000));
        let day = |d| NaiveDate::from_ymd_opt(2026, 2, d).unwrap();
        let txns = vec![
            Transaction::new(account.id, day(1), Money::from_cents(5_000), TransactionKind::Income),
            Transaction::new(account.id, day(10), Money::from_cents(2_000), TransactionKind::Expense),
            Transaction::new(AccountId::new(), day(5), Money::from_cents(99_999), TransactionKind::Income),
        ];

        assert_eq!(account.balance_as_of(&txns, day(5)).cents(), 15_000);
        assert_eq!(account.balance_as_of(&txns, day(28)).cents(), 13_000);
    }

    #[test]
    fn test_balance_as_of_reference_date() {
        let day = |d| NaiveDate::from_ymd_opt(2026, 3, d).unwrap();
        let mut account = Account::new("Savings", AccountType::Savings);
        account.set_reference(Money::from_cents(100_000), Some(day(15)));
        let txns = vec![
            Transaction::new(account.id, day(10), Money::from_cents(7_000), TransactionKind::Income),
            Transaction::new(account.id, day(15), Money::from_cents(1_000), TransactionKind::Expense),
            Transaction::new(account.id, day(20), Money::from_cents(3_000), TransactionKind::Expense),
        ];

        // On the reference day the known balance already includes that day
        assert_eq!(account.balance_as_of(&txns, day(15)).cents(), 100_000);
        assert_eq!(account.balance_as_of(&txns, day(25)).cents(), 97_000);
        // Walking backward undoes the reference-day expense but not the earlier income
        assert_eq!(account.balance_as_of(&txns, day(12)).cents(), 101_000);
        assert_eq!(account.balance_as_of(&txns, day(9)).cents(), 94_000);
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Valid Name", AccountType::Checking);
        assert!(account.validate().is_ok());

        account.name = "  ".to_string();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(101))
        ));
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!(AccountType::parse("checking"), Some(AccountType::Checking));
        assert_eq!(AccountType::parse("CREDIT_CARD"), Some(AccountType::Credit));
        assert_eq!(AccountType::parse("invalid"), None);
    }

    #[test]
    fn test_serialization() {
        let account = Account::with_opening_balance("Test", AccountType::Cash, Money::from_cents(500));
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"type\":\"cash\""));
        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account.id, deserialized.id);
        assert_eq!(deserialized.reference_balance.cents(), 500);
    }
}
