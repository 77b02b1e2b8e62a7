//! Month-by-month scenario simulation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

use super::baseline::BaselineData;
use super::resolver::{ConfigurationResolver, ResolvedFlow};
use crate::error::{HorizonError, HorizonResult};
use crate::models::{Behavior, BehaviorConfiguration, InvestmentPolicy, Scenario};

/// One simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// Date of the month, stepped from the scenario start date
    pub month: NaiveDate,
    pub income: ResolvedFlow,
    pub expense: ResolvedFlow,
    /// Share of savings reported as invested; not deducted from savings
    pub investment_contribution: f64,
    pub savings: f64,
    pub investment_yield: f64,
    /// Net worth after this month
    pub net_worth: f64,
}

pub struct ScenarioSimulator;

impl ScenarioSimulator {
    /// Simulate every month of the scenario's horizon
    ///
    /// Net worth starts at the baseline net worth. Each month adds its
    /// savings plus the yield of the investment policy applied to the net
    /// worth carried in from the previous month.
    pub fn simulate(
        scenario: &Scenario,
        baseline: &BaselineData,
        configs: &[BehaviorConfiguration],
    ) -> Vec<MonthlyProjection> {
        // Without a flag the run cannot be cancelled
        Self::run(scenario, baseline, configs, None).unwrap_or_default()
    }

    /// Like `simulate`, checking `cancel` before each month
    pub fn simulate_cancellable(
        scenario: &Scenario,
        baseline: &BaselineData,
        configs: &[BehaviorConfiguration],
        cancel: &AtomicBool,
    ) -> HorizonResult<Vec<MonthlyProjection>> {
        Self::run(scenario, baseline, configs, Some(cancel))
    }

    fn run(
        scenario: &Scenario,
        baseline: &BaselineData,
        configs: &[BehaviorConfiguration],
        cancel: Option<&AtomicBool>,
    ) -> HorizonResult<Vec<MonthlyProjection>> {
        let total = scenario.total_months();
        let mut projections = Vec::with_capacity(total as usize);
        let mut net_worth = baseline.net_worth;

        for index in 0..total {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                log::debug!("Simulation of '{}' cancelled at month {}", scenario.name, index);
                return Err(HorizonError::Cancelled);
            }
            let projection = Self::project_month(scenario.month_at(index), net_worth, baseline, configs);
            net_worth = projection.net_worth;
            projections.push(projection);
        }

        Ok(projections)
    }

    fn project_month(
        month: NaiveDate,
        previous_net_worth: f64,
        baseline: &BaselineData,
        configs: &[BehaviorConfiguration],
    ) -> MonthlyProjection {
        let resolved = ConfigurationResolver::resolve_month(baseline, configs, month);
        let savings = resolved.income.total - resolved.expense.total;

        let (investment_contribution, investment_yield) = match investment_policy(configs, month) {
            Some(policy) => (
                savings * policy.allocation,
                previous_net_worth * policy.monthly_return_rate,
            ),
            None => (0.0, 0.0),
        };

        MonthlyProjection {
            month,
            income: resolved.income,
            expense: resolved.expense,
            investment_contribution,
            savings,
            investment_yield,
            net_worth: previous_net_worth + savings + investment_yield,
        }
    }
}

/// First investment policy in effect for `month`
fn investment_policy(configs: &[BehaviorConfiguration], month: NaiveDate) -> Option<&InvestmentPolicy> {
    configs
        .iter()
        .filter(|c| c.applies_to(month))
        .find_map(|c| match &c.behavior {
            Behavior::Investment(policy) => Some(policy),
            _ => None,
        })
}
