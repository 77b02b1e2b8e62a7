//! Display formatting for terminal output
//!
//! Provides utilities for formatting records as tables, trees and detail
//! views. Projection output lives in `reports`.

pub mod account;
pub mod category;
pub mod format;
pub mod plan;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use category::format_category_tree;
pub use plan::{
    describe_behavior, format_configuration_list, format_goal_list, format_scenario_details,
    format_scenario_list,
};
pub use transaction::format_transaction_register;
