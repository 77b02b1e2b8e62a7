//! Transaction model
//!
//! Recorded ledger entries. Income and expense transactions feed the
//! baseline; transfers only move money between accounts.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, TransactionId};
use super::money::Money;

/// Kind of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
    Transfer,
}

impl TransactionKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "receita" => Some(Self::Income),
            "expense" | "despesa" => Some(Self::Expense),
            "transfer" | "transferencia" => Some(Self::Transfer),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// The account this transaction belongs to
    pub account_id: AccountId,

    pub date: NaiveDate,

    /// Signed amount (positive for inflow, negative for outflow)
    pub amount: Money,

    pub kind: TransactionKind,

    /// Category ID (None for uncategorized entries and most transfers)
    #[serde(default)]
    pub category_id: Option<CategoryId>,

    #[serde(default)]
    pub description: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// The amount sign follows the kind: income is always an inflow and
    /// expense always an outflow. Transfers keep the sign they were given.
    pub fn new(account_id: AccountId, date: NaiveDate, amount: Money, kind: TransactionKind) -> Self {
        let amount = match kind {
            TransactionKind::Income => amount.abs(),
            TransactionKind::Expense => -amount.abs(),
            TransactionKind::Transfer => amount,
        };
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            account_id,
            date,
            amount,
            kind,
            category_id: None,
            description: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a categorized transaction with a description
    pub fn with_details(
        account_id: AccountId,
        date: NaiveDate,
        amount: Money,
        kind: TransactionKind,
        category_id: Option<CategoryId>,
        description: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(account_id, date, amount, kind);
        txn.category_id = category_id;
        txn.description = description.into();
        txn
    }

    pub fn is_transfer(&self) -> bool {
        self.kind == TransactionKind::Transfer
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_zero() {
            return Err(TransactionValidationError::ZeroAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    ZeroAmount,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroAmount => write!(f, "Transaction amount cannot be zero"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_sign_follows_kind() {
        let account_id = AccountId::new();

        let income = Transaction::new(account_id, date(), Money::from_cents(-5000), TransactionKind::Income);
        assert_eq!(income.amount.cents(), 5000);

        let expense = Transaction::new(account_id, date(), Money::from_cents(5000), TransactionKind::Expense);
        assert_eq!(expense.amount.cents(), -5000);

        let transfer = Transaction::new(account_id, date(), Money::from_cents(-700), TransactionKind::Transfer);
        assert_eq!(transfer.amount.cents(), -700);
        assert!(transfer.is_transfer());
    }

    #[test]
    fn test_zero_amount_rejected() {
        let txn = Transaction::new(AccountId::new(), date(), Money::zero(), TransactionKind::Expense);
        assert_eq!(txn.validate(), Err(TransactionValidationError::ZeroAmount));
    }

    #[test]
    fn test_display() {
        let txn = Transaction::with_details(
            AccountId::new(),
            date(),
            Money::from_cents(4250),
            TransactionKind::Expense,
            None,
            "Groceries",
        );
        assert_eq!(format!("{}", txn), "2026-03-15 Groceries -$42.50");
    }
}
