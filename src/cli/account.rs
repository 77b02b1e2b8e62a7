//! Account CLI commands
//!
//! Implements CLI commands for account management.

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use super::{parse_date, parse_money};
use crate::display::account::{format_account_details, format_account_list};
use crate::error::{HorizonError, HorizonResult};
use crate::models::{Account, AccountType};
use crate::services::account::AccountSummary;
use crate::services::AccountService;
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Create {
        /// Account name
        name: String,
        /// Account type (checking, savings, credit, cash, investment, other)
        #[arg(short = 't', long, default_value = "checking")]
        account_type: String,
        /// Opening balance (e.g., "1000.00" or "1000")
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        balance: String,
    },
    /// List all accounts with today's balances
    List {
        /// Show archived accounts
        #[arg(short, long)]
        all: bool,
    },
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
        /// Balance as of this date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,
    },
    /// Set the known balance of an account on a given day
    #[command(name = "set-balance")]
    SetBalance {
        /// Account name or ID
        account: String,
        /// Known balance
        #[arg(allow_hyphen_values = true)]
        balance: String,
        /// Day the balance was observed (YYYY-MM-DD); omit for an opening balance
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Archive an account
    Archive {
        /// Account name or ID
        account: String,
    },
}

fn find_account(service: &AccountService, identifier: &str) -> HorizonResult<Account> {
    service
        .find(identifier)?
        .ok_or_else(|| HorizonError::account_not_found(identifier))
}

/// Handle an account command
pub fn handle_account_command(storage: &Storage, cmd: AccountCommands) -> HorizonResult<()> {
    let service = AccountService::new(storage);
    let today = Local::now().date_naive();

    match cmd {
        AccountCommands::Create {
            name,
            account_type,
            balance,
        } => {
            let account_type = AccountType::parse(&account_type).ok_or_else(|| {
                HorizonError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: checking, savings, credit, cash, investment, other",
                    account_type
                ))
            })?;

            let mut opening_balance = parse_money(&balance)?;

            // Debt is entered as a positive number
            if account_type.is_liability() && opening_balance.is_positive() {
                opening_balance = -opening_balance;
            }

            let account = service.create(&name, account_type, opening_balance)?;

            println!("Created account: {}", account.name);
            println!("  Type: {}", account.account_type);
            println!("  Opening Balance: {}", account.reference_balance);
            println!("  ID: {}", account.id);
        }

        AccountCommands::List { all } => {
            let summaries = service.list_with_balances(all, today)?;
            print!("{}", format_account_list(&summaries));
        }

        AccountCommands::Show { account, as_of } => {
            let found = find_account(&service, &account)?;
            let date: NaiveDate = match as_of {
                Some(s) => parse_date(&s)?,
                None => today,
            };
            let balance = service.balance_as_of(found.id, date)?;
            print!(
                "{}",
                format_account_details(&AccountSummary {
                    account: found,
                    balance,
                })
            );
        }

        AccountCommands::SetBalance {
            account,
            balance,
            date,
        } => {
            let found = find_account(&service, &account)?;
            let balance = parse_money(&balance)?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let updated = service.set_reference_balance(found.id, balance, date)?;
            match updated.reference_date {
                Some(d) => println!("Set {} balance to {} as of {}", updated.name, balance, d),
                None => println!("Set {} opening balance to {}", updated.name, balance),
            }
        }

        AccountCommands::Archive { account } => {
            let found = find_account(&service, &account)?;
            let archived = service.archive(found.id)?;
            println!("Archived account: {}", archived.name);
        }
    }

    Ok(())
}
