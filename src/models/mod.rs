//! Core data models for Horizon
//!
//! This module contains the data structures for both sides of the tool:
//! the recorded ledger (accounts, categories, transactions) and the plans
//! projected from it (scenarios, behavior configurations, goals).

pub mod account;
pub mod behavior;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod month;
pub mod scenario;
pub mod transaction;

pub use account::{Account, AccountType};
pub use behavior::{
    AdjustmentMode, Behavior, BehaviorConfiguration, CategoryAdjustment, ConfigurationDraft,
    EventKind, InvestmentPolicy, ModeKind, OneTimeEvent, TargetKind,
};
pub use category::{Category, CategoryKind};
pub use goal::{FinancialGoal, GoalPriority};
pub use ids::{AccountId, CategoryId, ConfigurationId, GoalId, ScenarioId, TransactionId};
pub use money::Money;
pub use month::Month;
pub use scenario::{Scenario, ScenarioKind};
pub use transaction::{Transaction, TransactionKind};
