//! Scenario model
//!
//! A scenario is a named what-if plan projected month by month from its
//! start date over a horizon of whole years.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ScenarioId;
use super::month::add_months;

/// Shortest allowed projection horizon
pub const MIN_HORIZON_YEARS: u8 = 1;

/// Longest allowed projection horizon
pub const MAX_HORIZON_YEARS: u8 = 10;

/// Kind of scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    /// The seeded reference scenario; cannot be deleted
    Base,
    #[default]
    Custom,
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "Base"),
            Self::Custom => write!(f, "Custom"),
        }
    }
}

/// A financial planning scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: ScenarioKind,
    pub horizon_years: u8,
    /// First projected month; fixed when the scenario is created
    pub start_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Scenario {
    /// Create a custom scenario starting on `start_date`
    pub fn new(name: impl Into<String>, horizon_years: u8, start_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: ScenarioId::new(),
            name: name.into(),
            description: None,
            kind: ScenarioKind::Custom,
            horizon_years,
            start_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create the base scenario
    pub fn base(horizon_years: u8, start_date: NaiveDate) -> Self {
        let mut scenario = Self::new("Base", horizon_years, start_date);
        scenario.kind = ScenarioKind::Base;
        scenario.description = Some("Current behavior continued unchanged".to_string());
        scenario
    }

    pub fn is_base(&self) -> bool {
        self.kind == ScenarioKind::Base
    }

    /// Number of projected months
    pub fn total_months(&self) -> u32 {
        u32::from(self.horizon_years) * 12
    }

    /// Date of the projected month at `index` (0-based)
    pub fn month_at(&self, index: u32) -> NaiveDate {
        add_months(self.start_date, index)
    }

    /// Last day a goal may target: start date plus the full horizon
    pub fn end_date(&self) -> NaiveDate {
        add_months(self.start_date, self.total_months())
    }

    pub fn validate(&self) -> Result<(), ScenarioValidationError> {
        if self.name.trim().is_empty() {
            return Err(ScenarioValidationError::EmptyName);
        }
        validate_horizon(self.horizon_years)
    }
}

/// Check a horizon against the allowed range
pub fn validate_horizon(horizon_years: u8) -> Result<(), ScenarioValidationError> {
    if !(MIN_HORIZON_YEARS..=MAX_HORIZON_YEARS).contains(&horizon_years) {
        return Err(ScenarioValidationError::HorizonOutOfRange(horizon_years));
    }
    Ok(())
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} years)", self.name, self.horizon_years)
    }
}

/// Validation errors for scenarios
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioValidationError {
    EmptyName,
    HorizonOutOfRange(u8),
}

impl fmt::Display for ScenarioValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Scenario name is required"),
            Self::HorizonOutOfRange(years) => write!(
                f,
                "Horizon must be between {} and {} years (got {})",
                MIN_HORIZON_YEARS, MAX_HORIZON_YEARS, years
            ),
        }
    }
}

impl std::error::Error for ScenarioValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_month_layout() {
        let scenario = Scenario::new("Plan", 2, start());
        assert_eq!(scenario.total_months(), 24);
        assert_eq!(scenario.month_at(0), start());
        assert_eq!(scenario.month_at(3), NaiveDate::from_ymd_opt(2027, 1, 18).unwrap());
        assert_eq!(scenario.end_date(), NaiveDate::from_ymd_opt(2028, 10, 18).unwrap());
    }

    #[test]
    fn test_horizon_bounds() {
        assert!(validate_horizon(1).is_ok());
        assert!(validate_horizon(10).is_ok());
        assert_eq!(
            validate_horizon(0),
            Err(ScenarioValidationError::HorizonOutOfRange(0))
        );
        assert_eq!(
            validate_horizon(11),
            Err(ScenarioValidationError::HorizonOutOfRange(11))
        );
    }

    #[test]
    fn test_base_scenario() {
        let base = Scenario::base(5, start());
        assert!(base.is_base());
        assert!(base.validate().is_ok());

        let mut unnamed = Scenario::new(" ", 5, start());
        assert_eq!(unnamed.validate(), Err(ScenarioValidationError::EmptyName));
        unnamed.name = "Named".into();
        assert!(!unnamed.is_base());
    }
}
