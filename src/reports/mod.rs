//! Reports module for Horizon
//!
//! Terminal reports for the baseline, a projected scenario and scenario
//! comparisons.

pub mod baseline;
pub mod comparison;
pub mod projection;

use std::collections::HashMap;

pub use baseline::{BaselineReport, BaselineRow};
pub use comparison::ComparisonReport;
pub use projection::{format_goal_analyses, Granularity, PeriodRow, ProjectionReport};

use crate::models::CategoryId;
use crate::projection::CategoryKey;

/// Human-readable name of a baseline bucket
pub fn category_label(key: CategoryKey, category_names: &HashMap<CategoryId, String>) -> String {
    match key {
        CategoryKey::Uncategorized => "(uncategorized)".to_string(),
        CategoryKey::Category(id) => category_names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string()),
    }
}
