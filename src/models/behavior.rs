//! Behavior configuration model
//!
//! A behavior configuration changes how a scenario departs from the
//! baseline: it overrides one income or expense category, sets the
//! investment policy, or injects a one-time event into a single month.
//!
//! Each target kind carries exactly the fields it needs (`Behavior`), so a
//! stored configuration can never hold a nonsensical field combination.
//! Loose user input arrives as a `ConfigurationDraft` and is validated into
//! a `Behavior` at the service boundary.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ConfigurationId, ScenarioId};

/// Lowest accepted percentage change (-100% zeroes the category)
pub const MIN_CHANGE_PERCENT: f64 = -100.0;

/// Highest accepted percentage change
pub const MAX_CHANGE_PERCENT: f64 = 10_000.0;

/// How an income or expense category is overridden
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdjustmentMode {
    /// Scale the baseline value by `1 + change_percent / 100`
    Percentage { change_percent: f64 },
    /// Replace the baseline value entirely
    FixedValue { amount: f64 },
    /// Drop the category to zero
    Zero,
}

impl AdjustmentMode {
    /// Apply this mode to a baseline monthly value
    pub fn apply(&self, baseline_value: f64) -> f64 {
        match *self {
            Self::Percentage { change_percent } => baseline_value * (1.0 + change_percent / 100.0),
            Self::FixedValue { amount } => amount,
            Self::Zero => 0.0,
        }
    }
}

impl fmt::Display for AdjustmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percentage { change_percent } => write!(f, "{:+}%", change_percent),
            Self::FixedValue { amount } => write!(f, "fixed {:.2}", amount),
            Self::Zero => write!(f, "zero"),
        }
    }
}

/// Override of a single baseline category
///
/// A missing category targets the uncategorized bucket of the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryAdjustment {
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    pub mode: AdjustmentMode,
}

/// Investment policy for a scenario
///
/// `allocation` is reported as the invested share of each month's savings;
/// `monthly_return_rate` compounds against the whole running net worth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPolicy {
    /// Fraction of monthly savings reported as invested (0.0 - 1.0)
    pub allocation: f64,
    /// Monthly return applied to net worth (e.g., 0.01 for 1%)
    pub monthly_return_rate: f64,
}

/// Direction of a one-time event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Income,
    Expense,
}

impl EventKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "receita" => Some(Self::Income),
            "expense" | "despesa" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A single-month income or expense injection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneTimeEvent {
    pub description: String,
    /// Always positive; `kind` gives the direction
    pub amount: f64,
    pub date: NaiveDate,
    pub kind: EventKind,
}

/// What a configuration does, by target kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum Behavior {
    Income(CategoryAdjustment),
    Expense(CategoryAdjustment),
    Investment(InvestmentPolicy),
    OneTimeEvent(OneTimeEvent),
}

impl Behavior {
    pub fn target(&self) -> TargetKind {
        match self {
            Self::Income(_) => TargetKind::Income,
            Self::Expense(_) => TargetKind::Expense,
            Self::Investment(_) => TargetKind::Investment,
            Self::OneTimeEvent(_) => TargetKind::OneTimeEvent,
        }
    }

    /// Check value ranges that the type system cannot express
    pub fn validate(&self) -> Result<(), BehaviorValidationError> {
        match self {
            Self::Income(adjustment) => validate_mode(&adjustment.mode, true),
            Self::Expense(adjustment) => validate_mode(&adjustment.mode, false),
            Self::Investment(policy) => {
                if !policy.allocation.is_finite() || !(0.0..=1.0).contains(&policy.allocation) {
                    return Err(BehaviorValidationError::AllocationOutOfRange(policy.allocation));
                }
                if !policy.monthly_return_rate.is_finite()
                    || !(-1.0..=1.0).contains(&policy.monthly_return_rate)
                {
                    return Err(BehaviorValidationError::ReturnRateOutOfRange(
                        policy.monthly_return_rate,
                    ));
                }
                Ok(())
            }
            Self::OneTimeEvent(event) => {
                if event.description.trim().is_empty() {
                    return Err(BehaviorValidationError::MissingEventDescription);
                }
                if !event.amount.is_finite() {
                    return Err(BehaviorValidationError::NotANumber("event amount"));
                }
                if event.amount <= 0.0 {
                    return Err(BehaviorValidationError::NonPositiveEventAmount(event.amount));
                }
                Ok(())
            }
        }
    }
}

fn validate_mode(mode: &AdjustmentMode, income: bool) -> Result<(), BehaviorValidationError> {
    match *mode {
        AdjustmentMode::Percentage { change_percent } => {
            if !change_percent.is_finite() {
                return Err(BehaviorValidationError::NotANumber("percentage change"));
            }
            if !(MIN_CHANGE_PERCENT..=MAX_CHANGE_PERCENT).contains(&change_percent) {
                return Err(BehaviorValidationError::PercentageOutOfRange(change_percent));
            }
        }
        AdjustmentMode::FixedValue { amount } => {
            if !amount.is_finite() {
                return Err(BehaviorValidationError::NotANumber("fixed value"));
            }
            if income && amount < 0.0 {
                return Err(BehaviorValidationError::NegativeFixedValue(amount));
            }
        }
        AdjustmentMode::Zero => {}
    }
    Ok(())
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income(adj) | Self::Expense(adj) => {
                let category = adj
                    .category_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "uncategorized".to_string());
                write!(f, "{} {} {}", self.target(), category, adj.mode)
            }
            Self::Investment(policy) => write!(
                f,
                "investment {:.1}% of savings, {:.2}%/month return",
                policy.allocation * 100.0,
                policy.monthly_return_rate * 100.0
            ),
            Self::OneTimeEvent(event) => write!(
                f,
                "one-time {} '{}' {:.2} on {}",
                event.kind, event.description, event.amount, event.date
            ),
        }
    }
}

/// Target kind tag, as entered by users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Income,
    Expense,
    Investment,
    OneTimeEvent,
}

impl TargetKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "income" | "receita" => Some(Self::Income),
            "expense" | "despesa" => Some(Self::Expense),
            "investment" | "investimento" => Some(Self::Investment),
            "one_time_event" | "event" | "evento_unico" => Some(Self::OneTimeEvent),
            _ => None,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Investment => write!(f, "investment"),
            Self::OneTimeEvent => write!(f, "one_time_event"),
        }
    }
}

/// Mode tag, as entered by users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Percentage,
    FixedValue,
    Zero,
}

impl ModeKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "percentage" | "percent" | "percentual" => Some(Self::Percentage),
            "fixed_value" | "fixed" | "valor_fixo" => Some(Self::FixedValue),
            "zero" | "zerar" => Some(Self::Zero),
            _ => None,
        }
    }
}

/// A behavior configuration attached to a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfiguration {
    pub id: ConfigurationId,
    pub scenario_id: ScenarioId,
    /// First day the configuration applies; `None` means always
    #[serde(default)]
    pub effective_from: Option<NaiveDate>,
    pub behavior: Behavior,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BehaviorConfiguration {
    pub fn new(scenario_id: ScenarioId, behavior: Behavior, effective_from: Option<NaiveDate>) -> Self {
        let now = Utc::now();
        Self {
            id: ConfigurationId::new(),
            scenario_id,
            effective_from,
            behavior,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this configuration is in effect for a projected month
    pub fn applies_to(&self, month: NaiveDate) -> bool {
        self.effective_from.map_or(true, |from| month >= from)
    }

    /// Copy this configuration onto another scenario with a fresh ID
    pub fn copy_to(&self, scenario_id: ScenarioId) -> Self {
        Self::new(scenario_id, self.behavior.clone(), self.effective_from)
    }
}

/// Loosely-typed configuration input
///
/// Mirrors what a form or command line provides: every field optional,
/// gated by the `target` and `mode` tags.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationDraft {
    pub target: Option<TargetKind>,
    pub category_id: Option<CategoryId>,
    pub mode: Option<ModeKind>,
    pub change_percent: Option<f64>,
    pub fixed_value: Option<f64>,
    pub effective_from: Option<NaiveDate>,
    pub allocation: Option<f64>,
    pub monthly_return_rate: Option<f64>,
    pub event_description: Option<String>,
    pub event_amount: Option<f64>,
    pub event_date: Option<NaiveDate>,
    pub event_kind: Option<EventKind>,
}

impl ConfigurationDraft {
    /// Validate the draft and build the typed behavior
    pub fn into_behavior(self) -> Result<(Behavior, Option<NaiveDate>), BehaviorValidationError> {
        let target = self.target.ok_or(BehaviorValidationError::MissingTarget)?;

        let behavior = match target {
            TargetKind::Income | TargetKind::Expense => {
                let mode = match self.mode.ok_or(BehaviorValidationError::MissingMode)? {
                    ModeKind::Percentage => AdjustmentMode::Percentage {
                        change_percent: self
                            .change_percent
                            .ok_or(BehaviorValidationError::MissingPercentage)?,
                    },
                    ModeKind::FixedValue => AdjustmentMode::FixedValue {
                        amount: self
                            .fixed_value
                            .ok_or(BehaviorValidationError::MissingFixedValue)?,
                    },
                    ModeKind::Zero => AdjustmentMode::Zero,
                };
                let adjustment = CategoryAdjustment {
                    category_id: self.category_id,
                    mode,
                };
                if target == TargetKind::Income {
                    Behavior::Income(adjustment)
                } else {
                    Behavior::Expense(adjustment)
                }
            }
            TargetKind::Investment => {
                if self.fixed_value.is_some() {
                    return Err(BehaviorValidationError::UnexpectedField("fixed value"));
                }
                Behavior::Investment(InvestmentPolicy {
                    allocation: self
                        .allocation
                        .ok_or(BehaviorValidationError::MissingInvestmentField("allocation"))?,
                    monthly_return_rate: self.monthly_return_rate.ok_or(
                        BehaviorValidationError::MissingInvestmentField("monthly return rate"),
                    )?,
                })
            }
            TargetKind::OneTimeEvent => {
                let description = self
                    .event_description
                    .map(|d| d.trim().to_string())
                    .filter(|d| !d.is_empty())
                    .ok_or(BehaviorValidationError::MissingEventDescription)?;
                Behavior::OneTimeEvent(OneTimeEvent {
                    description,
                    amount: self
                        .event_amount
                        .ok_or(BehaviorValidationError::MissingEventAmount)?,
                    date: self.event_date.ok_or(BehaviorValidationError::MissingEventDate)?,
                    kind: self.event_kind.ok_or(BehaviorValidationError::MissingEventKind)?,
                })
            }
        };

        behavior.validate()?;
        Ok((behavior, self.effective_from))
    }
}

/// Validation errors for behavior configurations
#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorValidationError {
    MissingTarget,
    MissingMode,
    MissingPercentage,
    MissingFixedValue,
    NotANumber(&'static str),
    PercentageOutOfRange(f64),
    NegativeFixedValue(f64),
    MissingInvestmentField(&'static str),
    UnexpectedField(&'static str),
    AllocationOutOfRange(f64),
    ReturnRateOutOfRange(f64),
    MissingEventDescription,
    MissingEventAmount,
    NonPositiveEventAmount(f64),
    MissingEventDate,
    MissingEventKind,
}

impl fmt::Display for BehaviorValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget => write!(f, "Configuration target is required"),
            Self::MissingMode => {
                write!(f, "Mode is required for income and expense configurations")
            }
            Self::MissingPercentage => {
                write!(f, "Percentage change is required for percentage mode")
            }
            Self::MissingFixedValue => write!(f, "Fixed value is required for fixed_value mode"),
            Self::NotANumber(field) => write!(f, "The {} must be a number", field),
            Self::PercentageOutOfRange(pct) => write!(
                f,
                "Percentage change must be between {}% and +{}% (got {}%)",
                MIN_CHANGE_PERCENT, MAX_CHANGE_PERCENT, pct
            ),
            Self::NegativeFixedValue(amount) => write!(
                f,
                "Fixed value cannot be negative for income (got {})",
                amount
            ),
            Self::MissingInvestmentField(field) => {
                write!(f, "Investment configurations require a {}", field)
            }
            Self::UnexpectedField(field) => {
                write!(f, "Investment configurations do not take a {}", field)
            }
            Self::AllocationOutOfRange(value) => write!(
                f,
                "Investment allocation must be between 0 and 1 (got {})",
                value
            ),
            Self::ReturnRateOutOfRange(value) => write!(
                f,
                "Monthly return rate must be between -1 and 1 (got {})",
                value
            ),
            Self::MissingEventDescription => write!(f, "Event description is required"),
            Self::MissingEventAmount => write!(f, "Event amount is required"),
            Self::NonPositiveEventAmount(amount) => {
                write!(f, "Event amount must be greater than zero (got {})", amount)
            }
            Self::MissingEventDate => write!(f, "Event date is required"),
            Self::MissingEventKind => write!(f, "Event kind must be income or expense"),
        }
    }
}

impl std::error::Error for BehaviorValidationError {}
