//! Aggregate figures over a projection

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::simulator::MonthlyProjection;

/// Totals and extremes of a projection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub initial_net_worth: f64,
    pub final_net_worth: f64,
    pub accumulated_savings: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub total_investment: f64,
    pub total_yield: f64,
    /// Accumulated savings over total income, or 0 without income
    pub average_savings_rate: f64,
    /// Month with the highest savings (first one on ties)
    pub best_month: Option<NaiveDate>,
    /// Month with the lowest savings (first one on ties)
    pub worst_month: Option<NaiveDate>,
}

impl ProjectionSummary {
    pub fn from_projections(projections: &[MonthlyProjection]) -> Self {
        let (first, last) = match (projections.first(), projections.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Self::default(),
        };

        let mut summary = Self {
            initial_net_worth: first.net_worth - first.savings - first.investment_yield,
            final_net_worth: last.net_worth,
            ..Default::default()
        };

        let mut best = first;
        let mut worst = first;
        for p in projections {
            summary.accumulated_savings += p.savings;
            summary.total_income += p.income.total;
            summary.total_expense += p.expense.total;
            summary.total_investment += p.investment_contribution;
            summary.total_yield += p.investment_yield;

            if p.savings > best.savings {
                best = p;
            }
            if p.savings < worst.savings {
                worst = p;
            }
        }

        if summary.total_income > 0.0 {
            summary.average_savings_rate = summary.accumulated_savings / summary.total_income;
        }
        summary.best_month = Some(best.month);
        summary.worst_month = Some(worst.month);
        summary
    }
}
