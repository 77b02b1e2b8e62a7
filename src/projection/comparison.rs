//! Side-by-side comparison of projected scenarios

use serde::{Deserialize, Serialize};

use super::summary::ProjectionSummary;
use crate::error::{HorizonError, HorizonResult};
use crate::models::{Scenario, ScenarioId};

/// Fewest scenarios a comparison accepts
pub const MIN_COMPARED: usize = 2;

/// Most scenarios a comparison accepts
pub const MAX_COMPARED: usize = 3;

/// Headline figures of one compared scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMetrics {
    pub scenario_id: ScenarioId,
    pub scenario_name: String,
    pub final_net_worth: f64,
    pub accumulated_savings: f64,
    pub average_savings_rate: f64,
    pub total_income: f64,
    pub total_expense: f64,
}

/// Gap between the highest and lowest scenario on one metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricGap {
    pub highest: ScenarioId,
    pub lowest: ScenarioId,
    pub absolute: f64,
    /// Gap relative to the magnitude of the lowest value, so a negative
    /// lowest still yields a positive percentage; absent when the lowest is zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub metrics: Vec<ScenarioMetrics>,
    pub net_worth_gap: MetricGap,
    pub savings_gap: MetricGap,
}

impl ComparisonResult {
    pub fn metrics_for(&self, id: ScenarioId) -> Option<&ScenarioMetrics> {
        self.metrics.iter().find(|m| m.scenario_id == id)
    }
}

pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Reject scenario counts outside 2..=3
    pub fn validate_count(count: usize) -> HorizonResult<()> {
        if !(MIN_COMPARED..=MAX_COMPARED).contains(&count) {
            return Err(HorizonError::Validation(format!(
                "Comparison needs {} or {} scenarios, got {}",
                MIN_COMPARED, MAX_COMPARED, count
            )));
        }
        Ok(())
    }

    /// Compare projected scenarios, given in the order requested
    ///
    /// Ties go to the scenario listed first.
    pub fn compare(entries: &[(Scenario, ProjectionSummary)]) -> HorizonResult<ComparisonResult> {
        Self::validate_count(entries.len())?;

        let metrics: Vec<ScenarioMetrics> = entries
            .iter()
            .map(|(scenario, summary)| ScenarioMetrics {
                scenario_id: scenario.id,
                scenario_name: scenario.name.clone(),
                final_net_worth: summary.final_net_worth,
                accumulated_savings: summary.accumulated_savings,
                average_savings_rate: summary.average_savings_rate,
                total_income: summary.total_income,
                total_expense: summary.total_expense,
            })
            .collect();

        let mut net_worth_gap = gap(&metrics, |m| m.final_net_worth);
        let lowest_net_worth = metrics
            .iter()
            .find(|m| m.scenario_id == net_worth_gap.lowest)
            .map_or(0.0, |m| m.final_net_worth);
        if lowest_net_worth != 0.0 {
            net_worth_gap.percent = Some(net_worth_gap.absolute / lowest_net_worth.abs() * 100.0);
        }

        let savings_gap = gap(&metrics, |m| m.accumulated_savings);

        Ok(ComparisonResult {
            metrics,
            net_worth_gap,
            savings_gap,
        })
    }
}

fn gap(metrics: &[ScenarioMetrics], value: impl Fn(&ScenarioMetrics) -> f64) -> MetricGap {
    let mut highest = &metrics[0];
    let mut lowest = &metrics[0];
    for m in &metrics[1..] {
        if value(m) > value(highest) {
            highest = m;
        }
        if value(m) < value(lowest) {
            lowest = m;
        }
    }

    MetricGap {
        highest: highest.scenario_id,
        lowest: lowest.scenario_id,
        absolute: value(highest) - value(lowest),
        percent: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn entry(name: &str, final_net_worth: f64, accumulated_savings: f64) -> (Scenario, ProjectionSummary) {
        let scenario = Scenario::new(name, 1, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let summary = ProjectionSummary {
            final_net_worth,
            accumulated_savings,
            ..Default::default()
        };
        (scenario, summary)
    }

    #[test]
    fn test_count_validation() {
        assert!(ComparisonEngine::compare(&[entry("A", 1.0, 1.0)])
            .unwrap_err()
            .is_validation());
        let four: Vec<_> = (0..4).map(|i| entry("S", f64::from(i), 0.0)).collect();
        assert!(ComparisonEngine::compare(&four).unwrap_err().is_validation());
        assert!(ComparisonEngine::validate_count(3).is_ok());
    }

    #[test]
    fn test_gaps() {
        let entries = vec![
            entry("Base", 10_000.0, 4_800.0),
            entry("Frugal", 15_000.0, 9_000.0),
            entry("Splurge", 8_000.0, 2_000.0),
        ];
        let result = ComparisonEngine::compare(&entries).unwrap();

        assert_eq!(result.metrics.len(), 3);
        assert_eq!(result.net_worth_gap.highest, entries[1].0.id);
        assert_eq!(result.net_worth_gap.lowest, entries[2].0.id);
        assert_relative_eq!(result.net_worth_gap.absolute, 7_000.0);
        assert_relative_eq!(result.net_worth_gap.percent.unwrap(), 87.5);
        assert_relative_eq!(result.savings_gap.absolute, 7_000.0);
        assert_eq!(result.metrics_for(entries[0].0.id).unwrap().scenario_name, "Base");
    }

    #[test]
    fn test_ties_and_zero_lowest() {
        let entries = vec![entry("A", 0.0, 100.0), entry("B", 0.0, 100.0)];
        let result = ComparisonEngine::compare(&entries).unwrap();

        assert_eq!(result.net_worth_gap.highest, entries[0].0.id);
        assert_eq!(result.net_worth_gap.lowest, entries[0].0.id);
        assert_eq!(result.net_worth_gap.absolute, 0.0);
        assert!(result.net_worth_gap.percent.is_none());
    }
}
