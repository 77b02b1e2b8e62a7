//! Projection Report
//!
//! Summarizes a projected scenario by year or by month, followed by the
//! goal analyses.

use crate::display::format::{double_separator, format_amount, format_percentage, format_rate, separator};
use crate::projection::{GoalAnalysis, MonthlyProjection, ProjectionResult};

/// Row granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    #[default]
    Yearly,
    Monthly,
}

/// Aggregated figures for one row of the report
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodRow {
    pub label: String,
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
    pub investment_yield: f64,
    /// Net worth at the end of the period
    pub net_worth: f64,
}

impl PeriodRow {
    fn from_months(label: String, months: &[MonthlyProjection]) -> Self {
        Self {
            label,
            income: months.iter().map(|p| p.income.total).sum(),
            expense: months.iter().map(|p| p.expense.total).sum(),
            savings: months.iter().map(|p| p.savings).sum(),
            investment_yield: months.iter().map(|p| p.investment_yield).sum(),
            net_worth: months.last().map_or(0.0, |p| p.net_worth),
        }
    }
}

/// Projection Report
#[derive(Debug, Clone)]
pub struct ProjectionReport {
    pub result: ProjectionResult,
    pub rows: Vec<PeriodRow>,
    pub granularity: Granularity,
}

impl ProjectionReport {
    pub fn generate(result: &ProjectionResult, granularity: Granularity) -> Self {
        let rows = match granularity {
            Granularity::Monthly => result
                .projections
                .iter()
                .map(|p| PeriodRow::from_months(p.month.format("%Y-%m").to_string(), std::slice::from_ref(p)))
                .collect(),
            Granularity::Yearly => result
                .projections
                .chunks(12)
                .enumerate()
                .map(|(i, months)| PeriodRow::from_months(format!("Year {}", i + 1), months))
                .collect(),
        };

        Self {
            result: result.clone(),
            rows,
            granularity,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let scenario = &self.result.scenario;
        let summary = &self.result.summary;
        let money = |value: f64| format_amount(value, currency);

        let mut output = String::new();
        output.push_str(&format!("Projection: {}\n", scenario.name));
        output.push_str(&double_separator(90));
        output.push('\n');
        output.push_str(&format!(
            "{} year(s) from {} to {}\n\n",
            scenario.horizon_years,
            scenario.start_date,
            scenario.end_date()
        ));

        output.push_str(&format!(
            "Net Worth:        {:>16} -> {}\n",
            money(summary.initial_net_worth),
            money(summary.final_net_worth)
        ));
        output.push_str(&format!("Total Income:     {:>16}\n", money(summary.total_income)));
        output.push_str(&format!("Total Expenses:   {:>16}\n", money(summary.total_expense)));
        output.push_str(&format!("Saved:            {:>16}\n", money(summary.accumulated_savings)));
        output.push_str(&format!("Invested:         {:>16}\n", money(summary.total_investment)));
        output.push_str(&format!("Investment Yield: {:>16}\n", money(summary.total_yield)));
        output.push_str(&format!(
            "Savings Rate:     {:>16}\n",
            format_rate(summary.average_savings_rate)
        ));
        if let (Some(best), Some(worst)) = (summary.best_month, summary.worst_month) {
            output.push_str(&format!(
                "Best Month:       {:>16}\nWorst Month:      {:>16}\n",
                best.format("%Y-%m").to_string(),
                worst.format("%Y-%m").to_string()
            ));
        }
        output.push('\n');

        output.push_str(&format!(
            "{:<10} {:>15} {:>15} {:>15} {:>14} {:>16}\n",
            "Period", "Income", "Expenses", "Savings", "Yield", "Net Worth"
        ));
        output.push_str(&separator(90));
        output.push('\n');
        for row in &self.rows {
            output.push_str(&format!(
                "{:<10} {:>15} {:>15} {:>15} {:>14} {:>16}\n",
                row.label,
                money(row.income),
                money(row.expense),
                money(row.savings),
                money(row.investment_yield),
                money(row.net_worth)
            ));
        }

        if !self.result.goal_analyses.is_empty() {
            output.push('\n');
            output.push_str(&format_goal_analyses(&self.result.goal_analyses, currency));
        }

        output
    }
}

/// Format goal analyses with their suggestions
pub fn format_goal_analyses(analyses: &[GoalAnalysis], currency: &str) -> String {
    let mut output = String::new();
    output.push_str("Goals\n");
    output.push_str(&separator(90));
    output.push('\n');

    for analysis in analyses {
        output.push_str(&format!(
            "{} ({} by {}): {}\n",
            analysis.goal.name,
            format_amount(analysis.goal.target_amount, currency),
            analysis.goal.target_date,
            analysis.status
        ));
        output.push_str(&format!(
            "  Projected {} ({} of target)\n",
            format_amount(analysis.projected_net_worth, currency),
            format_percentage(analysis.percent_reached)
        ));
        for suggestion in &analysis.suggestions {
            output.push_str(&format!("  - {}\n", suggestion));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FinancialGoal, Scenario};
    use crate::projection::{BaselineData, CategoryKey, GoalAnalyzer, ProjectionSummary, ScenarioSimulator};
    use chrono::NaiveDate;

    fn result() -> ProjectionResult {
        let scenario = Scenario::new("Plan", 2, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        let mut baseline = BaselineData::default();
        baseline.income_by_category.insert(CategoryKey::Uncategorized, 1_000.0);
        baseline.expense_by_category.insert(CategoryKey::Uncategorized, 600.0);

        let projections = ScenarioSimulator::simulate(&scenario, &baseline, &[]);
        let goal = FinancialGoal::new(scenario.id, "Cushion", 20_000.0, NaiveDate::from_ymd_opt(2028, 9, 1).unwrap());
        ProjectionResult {
            summary: ProjectionSummary::from_projections(&projections),
            goal_analyses: GoalAnalyzer::analyze(&[goal], &projections),
            projections,
            scenario,
        }
    }

    #[test]
    fn test_yearly_rows() {
        let report = ProjectionReport::generate(&result(), Granularity::Yearly);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].savings, 4_800.0);
        assert_eq!(report.rows[1].net_worth, 9_600.0);
    }

    #[test]
    fn test_monthly_rows() {
        let report = ProjectionReport::generate(&result(), Granularity::Monthly);
        assert_eq!(report.rows.len(), 24);
        assert_eq!(report.rows[0].label, "2026-10");
    }

    #[test]
    fn test_terminal_output() {
        let output = ProjectionReport::generate(&result(), Granularity::Yearly).format_terminal("$");
        assert!(output.contains("Projection: Plan"));
        assert!(output.contains("$9600.00"));
        assert!(output.contains("Cushion"));
        assert!(output.contains("infeasible"));
    }
}
