//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use crate::models::Money;
use crate::services::account::AccountSummary;

/// Format a list of accounts with balances as a table
pub fn format_account_list(summaries: &[AccountSummary]) -> String {
    if summaries.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = summaries
        .iter()
        .map(|s| s.account.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let type_width = summaries
        .iter()
        .map(|s| s.account.account_type.to_string().len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<type_width$}  {:>14}  {}\n",
        "Name",
        "Type",
        "Balance",
        "Status",
        name_width = name_width,
        type_width = type_width,
    ));

    let rule = format!(
        "{:-<name_width$}  {:-<type_width$}  {:->14}  {:-<8}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        type_width = type_width,
    );
    output.push_str(&rule);

    for summary in summaries {
        let status = if summary.account.archived { "Archived" } else { "" };
        output.push_str(&format!(
            "{:<name_width$}  {:<type_width$}  {:>14}  {}\n",
            summary.account.name,
            summary.account.account_type,
            summary.balance.to_string(),
            status,
            name_width = name_width,
            type_width = type_width,
        ));
    }

    let total: Money = summaries.iter().map(|s| s.balance).sum();
    output.push_str(&rule);
    output.push_str(&format!(
        "{:<name_width$}  {:<type_width$}  {:>14}\n",
        "TOTAL",
        "",
        total.to_string(),
        name_width = name_width,
        type_width = type_width,
    ));

    output
}

/// Format a single account's details
pub fn format_account_details(summary: &AccountSummary) -> String {
    let account = &summary.account;

    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  Type:      {}\n", account.account_type));
    output.push_str(&format!("  ID:        {}\n", account.id));
    output.push_str(&format!(
        "  Archived:  {}\n",
        if account.archived { "Yes" } else { "No" }
    ));
    output.push('\n');

    match account.reference_date {
        Some(date) => output.push_str(&format!(
            "  Reference Balance: {} (as of {})\n",
            account.reference_balance, date
        )),
        None => output.push_str(&format!(
            "  Opening Balance:   {}\n",
            account.reference_balance
        )),
    }
    output.push_str(&format!("  Balance Today:     {}\n", summary.balance));

    if !account.notes.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Notes: {}\n", account.notes));
    }

    output.push('\n');
    output.push_str(&format!(
        "  Created:  {}\n",
        account.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        account.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, AccountType};
    use chrono::NaiveDate;

    fn create_test_summary(name: &str, balance: i64) -> AccountSummary {
        AccountSummary {
            account: Account::new(name, AccountType::Checking),
            balance: Money::from_cents(balance),
        }
    }

    #[test]
    fn test_format_account_list() {
        let summaries = vec![
            create_test_summary("Checking", 100_000),
            create_test_summary("Savings", 500_000),
        ];

        let output = format_account_list(&summaries);
        assert!(output.contains("Checking"));
        assert!(output.contains("Savings"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$6000.00"));
    }

    #[test]
    fn test_format_empty_list() {
        assert!(format_account_list(&[]).contains("No accounts found"));
    }

    #[test]
    fn test_format_account_details() {
        let mut summary = create_test_summary("My Account", 100_000);
        summary
            .account
            .set_reference(Money::from_cents(90_000), NaiveDate::from_ymd_opt(2026, 9, 30));
        let output = format_account_details(&summary);

        assert!(output.contains("My Account"));
        assert!(output.contains("Reference Balance: $900.00 (as of 2026-09-30)"));
        assert!(output.contains("Balance Today:     $1000.00"));
    }
}
