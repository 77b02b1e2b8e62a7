//! Financial goal model
//!
//! A goal is a target net worth by a target date, owned by one scenario and
//! evaluated against that scenario's projection.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{GoalId, ScenarioId};
use super::scenario::Scenario;

/// Relative importance of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl GoalPriority {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" | "baixa" => Some(Self::Low),
            "medium" | "media" | "média" => Some(Self::Medium),
            "high" | "alta" => Some(Self::High),
            _ => None,
        }
    }
}

impl fmt::Display for GoalPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A financial goal within a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub id: GoalId,
    pub scenario_id: ScenarioId,
    pub name: String,
    /// Net worth to reach, in currency units
    pub target_amount: f64,
    pub target_date: NaiveDate,
    /// Free-text tag (e.g., "retirement", "house")
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: GoalPriority,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FinancialGoal {
    pub fn new(
        scenario_id: ScenarioId,
        name: impl Into<String>,
        target_amount: f64,
        target_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            scenario_id,
            name: name.into(),
            target_amount,
            target_date,
            category: String::new(),
            priority: GoalPriority::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy this goal onto another scenario with a fresh ID
    pub fn copy_to(&self, scenario_id: ScenarioId) -> Self {
        let mut copy = Self::new(scenario_id, self.name.clone(), self.target_amount, self.target_date);
        copy.category = self.category.clone();
        copy.priority = self.priority;
        copy
    }

    /// Validate the goal against its owning scenario
    ///
    /// The target date must be strictly after `today` and no later than the
    /// scenario's end date.
    pub fn validate_for(&self, scenario: &Scenario, today: NaiveDate) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }

        if !self.target_amount.is_finite() || self.target_amount <= 0.0 {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }

        if self.target_date <= today {
            return Err(GoalValidationError::DateNotInFuture(self.target_date));
        }

        let end = scenario.end_date();
        if self.target_date > end {
            return Err(GoalValidationError::DateBeyondHorizon {
                date: self.target_date,
                end,
            });
        }

        Ok(())
    }
}

impl fmt::Display for FinancialGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} by {})", self.name, self.target_amount, self.target_date)
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(f64),
    DateNotInFuture(NaiveDate),
    DateBeyondHorizon { date: NaiveDate, end: NaiveDate },
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "Goal target amount must be greater than zero (got {})", amount)
            }
            Self::DateNotInFuture(date) => {
                write!(f, "Goal target date {} must be in the future", date)
            }
            Self::DateBeyondHorizon { date, end } => write!(
                f,
                "Goal target date {} is beyond the scenario horizon (ends {})",
                date, end
            ),
        }
    }
}

impl std::error::Error for GoalValidationError {}
