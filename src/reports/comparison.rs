//! Comparison Report
//!
//! Lays compared scenarios side by side and calls out the gaps.

use crate::display::format::{
    double_separator, format_amount, format_percentage, format_rate, separator, truncate,
};
use crate::models::ScenarioId;
use crate::projection::ComparisonResult;

/// Comparison Report
#[derive(Debug, Clone)]
pub struct ComparisonReport {
    pub result: ComparisonResult,
}

impl ComparisonReport {
    pub fn generate(result: &ComparisonResult) -> Self {
        Self {
            result: result.clone(),
        }
    }

    fn name_of(&self, id: ScenarioId) -> String {
        self.result
            .metrics_for(id)
            .map(|m| m.scenario_name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let metrics = &self.result.metrics;
        let money = |value: f64| format_amount(value, currency);
        let width = 20 + 18 * metrics.len();

        let mut output = String::new();
        output.push_str("Scenario Comparison\n");
        output.push_str(&double_separator(width));
        output.push('\n');

        output.push_str(&format!("{:<20}", ""));
        for m in metrics {
            output.push_str(&format!("{:>18}", truncate(&m.scenario_name, 16)));
        }
        output.push('\n');
        output.push_str(&separator(width));
        output.push('\n');

        let rows: Vec<(&str, Vec<String>)> = vec![
            ("Final Net Worth", metrics.iter().map(|m| money(m.final_net_worth)).collect()),
            ("Saved", metrics.iter().map(|m| money(m.accumulated_savings)).collect()),
            (
                "Savings Rate",
                metrics.iter().map(|m| format_rate(m.average_savings_rate)).collect(),
            ),
            ("Total Income", metrics.iter().map(|m| money(m.total_income)).collect()),
            ("Total Expenses", metrics.iter().map(|m| money(m.total_expense)).collect()),
        ];
        for (label, values) in &rows {
            output.push_str(&format!("{:<20}", label));
            for value in values {
                output.push_str(&format!("{:>18}", value));
            }
            output.push('\n');
        }
        output.push('\n');

        let nw = &self.result.net_worth_gap;
        output.push_str(&format!(
            "Highest net worth: {} (+{} over {}",
            self.name_of(nw.highest),
            money(nw.absolute),
            self.name_of(nw.lowest)
        ));
        match nw.percent {
            Some(percent) => output.push_str(&format!(", {})\n", format_percentage(percent))),
            None => output.push_str(")\n"),
        }

        let savings = &self.result.savings_gap;
        output.push_str(&format!(
            "Most saved:        {} (+{} over {})\n",
            self.name_of(savings.highest),
            money(savings.absolute),
            self.name_of(savings.lowest)
        ));

        output
    }
}
