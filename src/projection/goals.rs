//! Goal feasibility analysis

use serde::{Deserialize, Serialize};
use std::fmt;

use super::simulator::MonthlyProjection;
use crate::models::month::Month;
use crate::models::FinancialGoal;

/// Share of the target at or above which a goal is on track
pub const ON_TRACK_PERCENT: f64 = 100.0;

/// Share of the target at or above which a goal only needs adjusting
pub const ADJUSTABLE_PERCENT: f64 = 80.0;

/// Feasibility of a goal under a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    OnTrack,
    NeedsAdjustment,
    Infeasible,
}

impl GoalStatus {
    pub fn from_percent(percent_reached: f64) -> Self {
        if percent_reached >= ON_TRACK_PERCENT {
            Self::OnTrack
        } else if percent_reached >= ADJUSTABLE_PERCENT {
            Self::NeedsAdjustment
        } else {
            Self::Infeasible
        }
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "on track"),
            Self::NeedsAdjustment => write!(f, "needs adjustment"),
            Self::Infeasible => write!(f, "infeasible"),
        }
    }
}

/// Result of checking one goal against a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAnalysis {
    pub goal: FinancialGoal,
    pub status: GoalStatus,
    /// Projected net worth in the goal's month, or 0 past the horizon
    pub projected_net_worth: f64,
    /// Target minus projected; negative means a surplus
    pub difference: f64,
    pub percent_reached: f64,
    /// Projected months up to and including the goal's month
    pub months_remaining: u32,
    pub suggestions: Vec<String>,
}

pub struct GoalAnalyzer;

impl GoalAnalyzer {
    pub fn analyze(goals: &[FinancialGoal], projections: &[MonthlyProjection]) -> Vec<GoalAnalysis> {
        goals.iter().map(|goal| Self::analyze_goal(goal, projections)).collect()
    }

    /// Check one goal; the first projected month on or after the target month counts
    pub fn analyze_goal(goal: &FinancialGoal, projections: &[MonthlyProjection]) -> GoalAnalysis {
        let target_month = Month::of(goal.target_date);
        let matched = projections
            .iter()
            .position(|p| Month::of(p.month) >= target_month);

        let (projected_net_worth, months_remaining) = match matched {
            Some(index) => (projections[index].net_worth, index as u32 + 1),
            None => (0.0, projections.len() as u32),
        };
        let months_remaining = months_remaining.max(1);

        let difference = goal.target_amount - projected_net_worth;
        let percent_reached = if goal.target_amount == 0.0 {
            0.0
        } else {
            projected_net_worth / goal.target_amount * 100.0
        };
        let status = GoalStatus::from_percent(percent_reached);

        GoalAnalysis {
            suggestions: suggestions(status, difference, months_remaining),
            goal: goal.clone(),
            status,
            projected_net_worth,
            difference,
            percent_reached,
            months_remaining,
        }
    }
}

fn suggestions(status: GoalStatus, difference: f64, months_remaining: u32) -> Vec<String> {
    let monthly = difference / f64::from(months_remaining);
    match status {
        GoalStatus::OnTrack => vec![format!(
            "On track with a projected surplus of {:.2}",
            -difference
        )],
        GoalStatus::NeedsAdjustment => vec![
            format!("Projected to fall short by {:.2}", difference),
            format!(
                "Save about {:.2} more per month over the next {} months",
                monthly, months_remaining
            ),
        ],
        GoalStatus::Infeasible => vec![
            "Consider extending the target date or lowering the target amount".to_string(),
            format!(
                "Reaching the target would take {:.2} more, about {:.2} per month",
                difference, monthly
            ),
        ],
    }
}
