//! Transaction CLI commands

use chrono::Local;
use clap::Subcommand;

use super::{category_names, parse_date, parse_money};
use crate::display::transaction::format_transaction_register;
use crate::error::{HorizonError, HorizonResult};
use crate::models::TransactionKind;
use crate::services::transaction::{CreateTransactionInput, TransactionFilter};
use crate::services::{AccountService, CategoryService, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a transaction
    Add {
        /// Account name or ID
        account: String,
        /// Amount (e.g., "84.50"); the sign follows --kind for income and expense
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Kind (income, expense, transfer)
        #[arg(short, long, default_value = "expense")]
        kind: String,
        /// Category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by account
        #[arg(short, long)]
        account: Option<String>,
        /// Earliest date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> HorizonResult<()> {
    let service = TransactionService::new(storage);
    let accounts = AccountService::new(storage);

    match cmd {
        TransactionCommands::Add {
            account,
            amount,
            kind,
            category,
            date,
            description,
        } => {
            let account = accounts
                .find(&account)?
                .ok_or_else(|| HorizonError::account_not_found(&account))?;
            let kind = TransactionKind::parse(&kind).ok_or_else(|| {
                HorizonError::Validation(format!(
                    "Invalid transaction kind: '{}'. Use income, expense or transfer.",
                    kind
                ))
            })?;
            let category_id = match category {
                Some(name) => Some(
                    CategoryService::new(storage)
                        .find(&name)?
                        .ok_or_else(|| HorizonError::category_not_found(&name))?
                        .id,
                ),
                None => None,
            };
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };

            let txn = service.create(CreateTransactionInput {
                account_id: account.id,
                date,
                amount: parse_money(&amount)?,
                kind,
                category_id,
                description,
            })?;

            println!(
                "Recorded {} of {} on {} in {}",
                kind.to_string().to_lowercase(),
                txn.amount,
                txn.date,
                account.name
            );
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List {
            account,
            from,
            to,
            limit,
        } => {
            let mut filter = TransactionFilter::new().limit(limit);
            if let Some(account) = account {
                let found = accounts
                    .find(&account)?
                    .ok_or_else(|| HorizonError::account_not_found(&account))?;
                filter = filter.account(found.id);
            }
            filter.start_date = from.as_deref().map(parse_date).transpose()?;
            filter.end_date = to.as_deref().map(parse_date).transpose()?;

            let transactions = service.list(filter)?;
            print!(
                "{}",
                format_transaction_register(&transactions, &category_names(storage)?)
            );
        }

        TransactionCommands::Delete { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| HorizonError::transaction_not_found(&id))?;
            service.delete(txn.id)?;
            println!("Deleted transaction {} ({} on {})", txn.id, txn.amount, txn.date);
        }
    }

    Ok(())
}
