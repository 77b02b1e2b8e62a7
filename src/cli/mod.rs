//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod account;
pub mod behavior;
pub mod category;
pub mod goal;
pub mod project;
pub mod scenario;
pub mod transaction;

use chrono::NaiveDate;
use std::collections::HashMap;

pub use account::{handle_account_command, AccountCommands};
pub use behavior::{handle_behavior_command, BehaviorCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use project::{handle_project_command, ProjectCommands};
pub use scenario::{handle_scenario_command, ScenarioCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use crate::error::{HorizonError, HorizonResult};
use crate::models::{CategoryId, Money, Scenario};
use crate::storage::Storage;

/// Parse a date given as YYYY-MM-DD
pub(crate) fn parse_date(s: &str) -> HorizonResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        HorizonError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD format.", s))
    })
}

/// Parse a money amount such as "1000" or "1000.00"
pub(crate) fn parse_money(s: &str) -> HorizonResult<Money> {
    Money::parse(s).map_err(|e| {
        HorizonError::Validation(format!(
            "Invalid amount: '{}'. Use format like '1000.00' or '1000'. Error: {}",
            s, e
        ))
    })
}

/// Parse a plain number such as "-20" or "1500.50"
pub(crate) fn parse_number(s: &str, what: &str) -> HorizonResult<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| HorizonError::Validation(format!("Invalid {}: '{}'", what, s)))
}

/// Look up a scenario by name or ID
pub(crate) fn resolve_scenario(storage: &Storage, identifier: &str) -> HorizonResult<Scenario> {
    storage
        .scenarios
        .find(identifier)?
        .ok_or_else(|| HorizonError::scenario_not_found(identifier))
}

/// Category names keyed by ID, for display
pub(crate) fn category_names(storage: &Storage) -> HorizonResult<HashMap<CategoryId, String>> {
    Ok(storage
        .categories
        .get_all()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(" 2027-03-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2027, 3, 1).unwrap()
        );
        assert!(parse_date("03/01/2027").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("-20", "percentage").unwrap(), -20.0);
        assert!(parse_number("NaN", "percentage").is_err());
        assert!(parse_number("abc", "percentage").is_err());
    }
}
