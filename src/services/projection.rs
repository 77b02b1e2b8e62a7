//! Projection service
//!
//! Entry point to the projection engine: reads the ledger and plan records
//! through the engine's reader seams, then runs baseline, simulation, goal
//! analysis and comparison.

use chrono::{Local, NaiveDate};
use std::sync::atomic::AtomicBool;

use crate::config::settings::Settings;
use crate::error::HorizonResult;
use crate::models::ScenarioId;
use crate::projection::{
    BaselineCalculator, BaselineData, ComparisonEngine, ComparisonResult, GoalAnalyzer,
    LedgerReader, MonthlyProjection, PlanReader, ProjectionResult, ProjectionSummary,
    ScenarioSimulator,
};
use crate::storage::Storage;

/// Service for baselines, projections and comparisons
pub struct ProjectionService<'a> {
    ledger: &'a dyn LedgerReader,
    plans: &'a dyn PlanReader,
    baseline: BaselineCalculator,
    today: NaiveDate,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> ProjectionService<'a> {
    /// Read everything from `storage`, averaging over the configured window
    pub fn new(storage: &'a Storage, settings: &Settings) -> Self {
        Self::with_sources(
            storage,
            storage,
            BaselineCalculator::new(settings.baseline_months),
            Local::now().date_naive(),
        )
    }

    /// Build the service from explicit collaborators
    pub fn with_sources(
        ledger: &'a dyn LedgerReader,
        plans: &'a dyn PlanReader,
        baseline: BaselineCalculator,
        today: NaiveDate,
    ) -> Self {
        Self {
            ledger,
            plans,
            baseline,
            today,
            cancel: None,
        }
    }

    /// Abort simulations once `flag` is set
    pub fn with_cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Compute the baseline from recorded history
    pub fn calculate_baseline(&self) -> HorizonResult<BaselineData> {
        self.baseline.compute(self.ledger, self.today)
    }

    /// Project one scenario from the current baseline
    pub fn calculate_projection(&self, scenario_id: ScenarioId) -> HorizonResult<ProjectionResult> {
        // Missing scenarios fail before any ledger reads
        self.plans.get_scenario(scenario_id)?;
        let baseline = self.calculate_baseline()?;
        self.project(scenario_id, &baseline)
    }

    /// Project 2 or 3 scenarios from one shared baseline and compare them
    pub fn compare_scenarios(&self, scenario_ids: &[ScenarioId]) -> HorizonResult<ComparisonResult> {
        ComparisonEngine::validate_count(scenario_ids.len())?;

        let baseline = self.calculate_baseline()?;
        let entries = scenario_ids
            .iter()
            .map(|&id| {
                let result = self.project(id, &baseline)?;
                Ok((result.scenario, result.summary))
            })
            .collect::<HorizonResult<Vec<_>>>()?;

        ComparisonEngine::compare(&entries)
    }

    fn project(&self, scenario_id: ScenarioId, baseline: &BaselineData) -> HorizonResult<ProjectionResult> {
        let scenario = self.plans.get_scenario(scenario_id)?;
        let configs = self.plans.list_configurations(scenario_id)?;
        let goals = self.plans.list_goals(scenario_id)?;

        log::debug!(
            "Projecting '{}' over {} months with {} configurations and {} goals",
            scenario.name,
            scenario.total_months(),
            configs.len(),
            goals.len()
        );

        let projections: Vec<MonthlyProjection> = match self.cancel {
            Some(flag) => ScenarioSimulator::simulate_cancellable(&scenario, baseline, &configs, flag)?,
            None => ScenarioSimulator::simulate(&scenario, baseline, &configs),
        };
        let summary = ProjectionSummary::from_projections(&projections);
        let goal_analyses = GoalAnalyzer::analyze(&goals, &projections);

        Ok(ProjectionResult {
            scenario,
            projections,
            summary,
            goal_analyses,
        })
    }
}
