//! Scenario projection engine
//!
//! Pure computation over already-read records: the baseline is derived from
//! the ledger, each scenario is simulated month by month from it, and the
//! results are summarized, checked against goals and compared. Reads go
//! through the `LedgerReader` and `PlanReader` seams in `sources`.

pub mod baseline;
pub mod comparison;
pub mod goals;
pub mod resolver;
pub mod simulator;
pub mod sources;
pub mod summary;

use serde::{Deserialize, Serialize};

pub use baseline::{BaselineCalculator, BaselineData, CategoryKey};
pub use comparison::{ComparisonEngine, ComparisonResult, MetricGap, ScenarioMetrics};
pub use goals::{GoalAnalysis, GoalAnalyzer, GoalStatus};
pub use resolver::{ConfigurationResolver, ResolvedFlow, ResolvedMonth};
pub use simulator::{MonthlyProjection, ScenarioSimulator};
pub use sources::{LedgerReader, PlanReader};
pub use summary::ProjectionSummary;

use crate::models::Scenario;

/// Full projection of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub scenario: Scenario,
    pub projections: Vec<MonthlyProjection>,
    pub summary: ProjectionSummary,
    pub goal_analyses: Vec<GoalAnalysis>,
}
