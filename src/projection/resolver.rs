//! Per-month configuration resolution
//!
//! Turns the baseline plus a scenario's configurations into the income and
//! expense figures of one projected month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::baseline::{BaselineData, CategoryKey};
use crate::models::month::same_month;
use crate::models::{Behavior, BehaviorConfiguration, CategoryAdjustment, EventKind};

/// Resolved income or expense of one month
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedFlow {
    /// Category values plus one-time events
    pub total: f64,
    /// Category values only; one-time events never appear here
    pub by_category: BTreeMap<CategoryKey, f64>,
}

/// Income and expense of one month after applying configurations
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedMonth {
    pub income: ResolvedFlow,
    pub expense: ResolvedFlow,
}

pub struct ConfigurationResolver;

impl ConfigurationResolver {
    /// Configurations in effect for `month`, in their original order
    pub fn applicable(configs: &[BehaviorConfiguration], month: NaiveDate) -> Vec<&BehaviorConfiguration> {
        configs.iter().filter(|c| c.applies_to(month)).collect()
    }

    /// Resolve income and expense for `month`
    ///
    /// Each baseline category takes the first applicable configuration that
    /// targets it; categories without one keep their baseline value.
    pub fn resolve_month(
        baseline: &BaselineData,
        configs: &[BehaviorConfiguration],
        month: NaiveDate,
    ) -> ResolvedMonth {
        let applicable = Self::applicable(configs, month);

        let income_adjustments: Vec<&CategoryAdjustment> = applicable
            .iter()
            .filter_map(|c| match &c.behavior {
                Behavior::Income(adjustment) => Some(adjustment),
                _ => None,
            })
            .collect();
        let expense_adjustments: Vec<&CategoryAdjustment> = applicable
            .iter()
            .filter_map(|c| match &c.behavior {
                Behavior::Expense(adjustment) => Some(adjustment),
                _ => None,
            })
            .collect();

        let mut income = resolve_flow(&baseline.income_by_category, &income_adjustments);
        let mut expense = resolve_flow(&baseline.expense_by_category, &expense_adjustments);

        for config in &applicable {
            if let Behavior::OneTimeEvent(event) = &config.behavior {
                if !same_month(event.date, month) {
                    continue;
                }
                match event.kind {
                    EventKind::Income => income.total += event.amount,
                    EventKind::Expense => expense.total += event.amount,
                }
            }
        }

        ResolvedMonth { income, expense }
    }
}

fn resolve_flow(baseline: &BTreeMap<CategoryKey, f64>, adjustments: &[&CategoryAdjustment]) -> ResolvedFlow {
    let by_category: BTreeMap<CategoryKey, f64> = baseline
        .iter()
        .map(|(key, &value)| {
            let resolved = adjustments
                .iter()
                .find(|a| CategoryKey::from(a.category_id) == *key)
                .map_or(value, |a| a.mode.apply(value));
            (*key, resolved)
        })
        .collect();

    ResolvedFlow {
        total: by_category.values().sum(),
        by_category,
    }
}
