//! Planning service
//!
//! Owns the plan records: scenarios, their behavior configurations and
//! their goals. All validation of plan input happens here, so the
//! projection engine only ever sees well-formed records.

use chrono::{Local, NaiveDate, Utc};

use crate::audit::EntityType;
use crate::error::{HorizonError, HorizonResult};
use crate::models::scenario::validate_horizon;
use crate::models::{
    BehaviorConfiguration, ConfigurationDraft, ConfigurationId, FinancialGoal, GoalId,
    GoalPriority, Scenario, ScenarioId,
};
use crate::storage::Storage;

/// Input for creating a scenario
#[derive(Debug, Clone)]
pub struct CreateScenarioInput {
    pub name: String,
    pub description: Option<String>,
    pub horizon_years: u8,
    /// Copy configurations and goals from this scenario
    pub clone_from: Option<ScenarioId>,
}

/// Changes to apply to a scenario; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateScenarioInput {
    pub name: Option<String>,
    /// An empty string clears the description
    pub description: Option<String>,
    pub horizon_years: Option<u8>,
}

/// Input for creating a goal
#[derive(Debug, Clone)]
pub struct GoalInput {
    pub name: String,
    pub target_amount: f64,
    pub target_date: NaiveDate,
    pub category: Option<String>,
    pub priority: Option<GoalPriority>,
}

/// Changes to apply to a goal; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateGoalInput {
    pub name: Option<String>,
    pub target_amount: Option<f64>,
    pub target_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub priority: Option<GoalPriority>,
}

/// Service for scenario, configuration and goal management
pub struct PlanningService<'a> {
    storage: &'a Storage,
    today: NaiveDate,
}

impl<'a> PlanningService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_today(storage, Local::now().date_naive())
    }

    /// Create a service that treats `today` as the current date
    pub fn with_today(storage: &'a Storage, today: NaiveDate) -> Self {
        Self { storage, today }
    }

    // === Scenarios ===

    /// All scenarios, newest first
    pub fn list_scenarios(&self) -> HorizonResult<Vec<Scenario>> {
        self.storage.scenarios.get_all()
    }

    pub fn get_scenario(&self, id: ScenarioId) -> HorizonResult<Scenario> {
        self.storage
            .scenarios
            .get(id)?
            .ok_or_else(|| HorizonError::scenario_not_found(id.to_string()))
    }

    /// Find a scenario by name or ID string
    pub fn find_scenario(&self, identifier: &str) -> HorizonResult<Option<Scenario>> {
        self.storage.scenarios.find(identifier)
    }

    /// Create a custom scenario starting today
    pub fn create_scenario(&self, input: CreateScenarioInput) -> HorizonResult<Scenario> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(HorizonError::Validation("Scenario name is required".into()));
        }
        validate_horizon(input.horizon_years).map_err(|e| HorizonError::Validation(e.to_string()))?;

        let mut scenario = Scenario::new(name, input.horizon_years, self.today);
        scenario.description = non_empty(input.description);

        // Build every copy up front so a bad goal aborts before anything is written
        let (configurations, goals) = match input.clone_from {
            Some(source_id) => {
                self.get_scenario(source_id)?;
                let configurations: Vec<_> = self
                    .storage
                    .configurations
                    .get_by_scenario(source_id)?
                    .iter()
                    .map(|c| c.copy_to(scenario.id))
                    .collect();
                let goals: Vec<_> = self
                    .storage
                    .goals
                    .get_by_scenario(source_id)?
                    .iter()
                    .map(|g| g.copy_to(scenario.id))
                    .collect();
                for goal in &goals {
                    goal.validate_for(&scenario, self.today)
                        .map_err(|e| HorizonError::Validation(format!("Cannot copy goal '{}': {}", goal.name, e)))?;
                }
                (configurations, goals)
            }
            None => (Vec::new(), Vec::new()),
        };

        self.storage.scenarios.upsert(scenario.clone())?;
        self.storage.scenarios.save()?;
        self.log_scenario_created(&scenario)?;

        if !configurations.is_empty() {
            for configuration in &configurations {
                self.storage.configurations.upsert(configuration.clone())?;
            }
            self.storage.configurations.save()?;
            for configuration in &configurations {
                self.log_configuration_created(configuration)?;
            }
        }

        if !goals.is_empty() {
            for goal in &goals {
                self.storage.goals.upsert(goal.clone())?;
            }
            self.storage.goals.save()?;
            for goal in &goals {
                self.log_goal_created(goal)?;
            }
        }

        log::debug!(
            "Created scenario {} ({} configurations, {} goals copied)",
            scenario.id,
            configurations.len(),
            goals.len()
        );

        Ok(scenario)
    }

    /// Copy a scenario with all its configurations and goals
    ///
    /// The copy starts today; its name defaults to "<name> (Copy)".
    pub fn duplicate_scenario(&self, id: ScenarioId, new_name: Option<&str>) -> HorizonResult<Scenario> {
        let source = self.get_scenario(id)?;
        let name = new_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} (Copy)", source.name));

        self.create_scenario(CreateScenarioInput {
            name,
            description: source.description.clone(),
            horizon_years: source.horizon_years,
            clone_from: Some(source.id),
        })
    }

    /// Update a scenario's name, description or horizon
    pub fn update_scenario(&self, id: ScenarioId, input: UpdateScenarioInput) -> HorizonResult<Scenario> {
        let mut scenario = self.get_scenario(id)?;
        let before = scenario.clone();

        if let Some(name) = input.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(HorizonError::Validation("Scenario name is required".into()));
            }
            scenario.name = name.to_string();
        }
        if let Some(description) = input.description {
            scenario.description = non_empty(Some(description));
        }
        if let Some(horizon) = input.horizon_years {
            validate_horizon(horizon).map_err(|e| HorizonError::Validation(e.to_string()))?;
            scenario.horizon_years = horizon;
        }
        scenario.updated_at = Utc::now();

        self.storage.scenarios.upsert(scenario.clone())?;
        self.storage.scenarios.save()?;

        self.storage.log_update(
            EntityType::Scenario,
            scenario.id.to_string(),
            Some(scenario.name.clone()),
            &before,
            &scenario,
        )?;

        Ok(scenario)
    }

    /// Delete a custom scenario together with its configurations and goals
    pub fn delete_scenario(&self, id: ScenarioId) -> HorizonResult<Scenario> {
        let scenario = self.get_scenario(id)?;
        if scenario.is_base() {
            return Err(HorizonError::Validation(
                "The base scenario cannot be deleted".into(),
            ));
        }

        let configurations = self.storage.configurations.delete_by_scenario(id)?;
        let goals = self.storage.goals.delete_by_scenario(id)?;
        self.storage.scenarios.delete(id)?;

        self.storage.configurations.save()?;
        self.storage.goals.save()?;
        self.storage.scenarios.save()?;

        for configuration in &configurations {
            self.storage.log_delete(
                EntityType::Configuration,
                configuration.id.to_string(),
                Some(configuration.behavior.to_string()),
                configuration,
            )?;
        }
        for goal in &goals {
            self.storage.log_delete(
                EntityType::Goal,
                goal.id.to_string(),
                Some(goal.name.clone()),
                goal,
            )?;
        }
        self.storage.log_delete(
            EntityType::Scenario,
            scenario.id.to_string(),
            Some(scenario.name.clone()),
            &scenario,
        )?;

        Ok(scenario)
    }

    /// Return the base scenario, seeding it if none exists
    pub fn ensure_base_scenario(&self, horizon_years: u8) -> HorizonResult<Scenario> {
        if let Some(base) = self.storage.scenarios.get_base()? {
            return Ok(base);
        }

        validate_horizon(horizon_years).map_err(|e| HorizonError::Validation(e.to_string()))?;
        let base = Scenario::base(horizon_years, self.today);
        self.storage.scenarios.upsert(base.clone())?;
        self.storage.scenarios.save()?;
        self.log_scenario_created(&base)?;

        Ok(base)
    }

    // === Behavior configurations ===

    /// Configurations of a scenario, in the order they were added
    pub fn list_configurations(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<BehaviorConfiguration>> {
        self.storage.configurations.get_by_scenario(scenario_id)
    }

    pub fn find_configuration(&self, identifier: &str) -> HorizonResult<Option<BehaviorConfiguration>> {
        self.storage.configurations.find(identifier)
    }

    /// Validate a draft and attach it to a scenario
    pub fn add_configuration(
        &self,
        scenario_id: ScenarioId,
        draft: ConfigurationDraft,
    ) -> HorizonResult<BehaviorConfiguration> {
        self.get_scenario(scenario_id)?;

        if let Some(category_id) = draft.category_id {
            if !self.storage.categories.exists(category_id)? {
                return Err(HorizonError::category_not_found(category_id.to_string()));
            }
        }

        let (behavior, effective_from) = draft
            .into_behavior()
            .map_err(|e| HorizonError::Validation(e.to_string()))?;
        let configuration = BehaviorConfiguration::new(scenario_id, behavior, effective_from);

        self.storage.configurations.upsert(configuration.clone())?;
        self.storage.configurations.save()?;
        self.log_configuration_created(&configuration)?;

        Ok(configuration)
    }

    pub fn remove_configuration(&self, id: ConfigurationId) -> HorizonResult<BehaviorConfiguration> {
        let configuration = self
            .storage
            .configurations
            .get(id)?
            .ok_or_else(|| HorizonError::configuration_not_found(id.to_string()))?;

        self.storage.configurations.delete(id)?;
        self.storage.configurations.save()?;

        self.storage.log_delete(
            EntityType::Configuration,
            id.to_string(),
            Some(configuration.behavior.to_string()),
            &configuration,
        )?;

        Ok(configuration)
    }

    // === Goals ===

    /// Goals of a scenario, earliest target date first
    pub fn list_goals(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<FinancialGoal>> {
        self.storage.goals.get_by_scenario(scenario_id)
    }

    pub fn find_goal(&self, identifier: &str) -> HorizonResult<Option<FinancialGoal>> {
        self.storage.goals.find(identifier)
    }

    /// Add a goal, validated against the scenario's horizon
    pub fn add_goal(&self, scenario_id: ScenarioId, input: GoalInput) -> HorizonResult<FinancialGoal> {
        let scenario = self.get_scenario(scenario_id)?;

        let mut goal = FinancialGoal::new(
            scenario_id,
            input.name.trim(),
            input.target_amount,
            input.target_date,
        );
        goal.category = input.category.unwrap_or_default().trim().to_string();
        goal.priority = input.priority.unwrap_or_default();
        goal.validate_for(&scenario, self.today)
            .map_err(|e| HorizonError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;
        self.log_goal_created(&goal)?;

        Ok(goal)
    }

    /// Update a goal; ID and owning scenario never change
    pub fn update_goal(&self, id: GoalId, input: UpdateGoalInput) -> HorizonResult<FinancialGoal> {
        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| HorizonError::goal_not_found(id.to_string()))?;
        let scenario = self.get_scenario(goal.scenario_id)?;
        let before = goal.clone();

        if let Some(name) = input.name {
            goal.name = name.trim().to_string();
        }
        if let Some(amount) = input.target_amount {
            goal.target_amount = amount;
        }
        if let Some(date) = input.target_date {
            goal.target_date = date;
        }
        if let Some(category) = input.category {
            goal.category = category.trim().to_string();
        }
        if let Some(priority) = input.priority {
            goal.priority = priority;
        }
        goal.updated_at = Utc::now();

        goal.validate_for(&scenario, self.today)
            .map_err(|e| HorizonError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_update(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            &before,
            &goal,
        )?;

        Ok(goal)
    }

    pub fn remove_goal(&self, id: GoalId) -> HorizonResult<FinancialGoal> {
        let goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| HorizonError::goal_not_found(id.to_string()))?;

        self.storage.goals.delete(id)?;
        self.storage.goals.save()?;

        self.storage.log_delete(
            EntityType::Goal,
            id.to_string(),
            Some(goal.name.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    fn log_scenario_created(&self, scenario: &Scenario) -> HorizonResult<()> {
        self.storage.log_create(
            EntityType::Scenario,
            scenario.id.to_string(),
            Some(scenario.name.clone()),
            scenario,
        )
    }

    fn log_configuration_created(&self, configuration: &BehaviorConfiguration) -> HorizonResult<()> {
        self.storage.log_create(
            EntityType::Configuration,
            configuration.id.to_string(),
            Some(configuration.behavior.to_string()),
            configuration,
        )
    }

    fn log_goal_created(&self, goal: &FinancialGoal) -> HorizonResult<()> {
        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.name.clone()),
            goal,
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
