//! Financial goal repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::HorizonResult;
use crate::models::{FinancialGoal, GoalId, ScenarioId};

use super::file_io::{read_json, write_json_atomic};
use super::{read_lock, write_lock};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    goals: Vec<FinancialGoal>,
}

/// Repository for goal persistence
pub struct GoalRepository {
    path: PathBuf,
    data: RwLock<HashMap<GoalId, FinancialGoal>>,
}

impl GoalRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> HorizonResult<()> {
        let file_data: GoalData = read_json(&self.path)?;
        let mut data = write_lock(&self.data)?;
        data.clear();
        for goal in file_data.goals {
            data.insert(goal.id, goal);
        }
        Ok(())
    }

    pub fn save(&self) -> HorizonResult<()> {
        let mut goals: Vec<_> = read_lock(&self.data)?.values().cloned().collect();
        goals.sort_by(|a, b| a.target_date.cmp(&b.target_date).then(a.created_at.cmp(&b.created_at)));
        write_json_atomic(&self.path, &GoalData { goals })
    }

    pub fn get(&self, id: GoalId) -> HorizonResult<Option<FinancialGoal>> {
        Ok(read_lock(&self.data)?.get(&id).cloned())
    }

    /// Find a goal by full or short ID
    pub fn find(&self, identifier: &str) -> HorizonResult<Option<FinancialGoal>> {
        Ok(read_lock(&self.data)?
            .values()
            .find(|g| g.id.matches(identifier))
            .cloned())
    }

    /// Goals of one scenario, earliest target date first
    pub fn get_by_scenario(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<FinancialGoal>> {
        let mut goals: Vec<_> = read_lock(&self.data)?
            .values()
            .filter(|g| g.scenario_id == scenario_id)
            .cloned()
            .collect();
        goals.sort_by(|a, b| a.target_date.cmp(&b.target_date).then(a.created_at.cmp(&b.created_at)));
        Ok(goals)
    }

    pub fn upsert(&self, goal: FinancialGoal) -> HorizonResult<()> {
        write_lock(&self.data)?.insert(goal.id, goal);
        Ok(())
    }

    pub fn delete(&self, id: GoalId) -> HorizonResult<bool> {
        Ok(write_lock(&self.data)?.remove(&id).is_some())
    }

    /// Remove every goal of a scenario, returning what was removed
    pub fn delete_by_scenario(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<FinancialGoal>> {
        let mut data = write_lock(&self.data)?;
        let ids: Vec<_> = data
            .values()
            .filter(|g| g.scenario_id == scenario_id)
            .map(|g| g.id)
            .collect();
        Ok(ids.into_iter().filter_map(|id| data.remove(&id)).collect())
    }

    pub fn count(&self) -> HorizonResult<usize> {
        Ok(read_lock(&self.data)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn goal(scenario_id: ScenarioId, name: &str, year: i32) -> FinancialGoal {
        FinancialGoal::new(
            scenario_id,
            name,
            10_000.0,
            NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
        )
    }

    #[test]
    fn test_scenario_goals_sorted_by_date() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("goals.json");
        let repo = GoalRepository::new(path.clone());
        let scenario_id = ScenarioId::new();
        repo.upsert(goal(scenario_id, "House", 2030)).unwrap();
        repo.upsert(goal(scenario_id, "Car", 2027)).unwrap();
        repo.upsert(goal(ScenarioId::new(), "Other", 2028)).unwrap();
        repo.save().unwrap();

        let reloaded = GoalRepository::new(path);
        reloaded.load().unwrap();
        let names: Vec<_> = reloaded
            .get_by_scenario(scenario_id)
            .unwrap()
            .into_iter()
            .map(|g| g.name)
            .collect();
        assert_eq!(names, vec!["Car", "House"]);
    }

    #[test]
    fn test_delete_by_scenario() {
        let temp_dir = TempDir::new().unwrap();
        let repo = GoalRepository::new(temp_dir.path().join("goals.json"));
        let scenario_id = ScenarioId::new();
        repo.upsert(goal(scenario_id, "A", 2027)).unwrap();
        repo.upsert(goal(scenario_id, "B", 2028)).unwrap();
        repo.upsert(goal(ScenarioId::new(), "C", 2029)).unwrap();

        assert_eq!(repo.delete_by_scenario(scenario_id).unwrap().len(), 2);
        assert_eq!(repo.count().unwrap(), 1);
    }
}
