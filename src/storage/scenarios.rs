//! Scenario repository for JSON storage

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::HorizonResult;
use crate::models::{Scenario, ScenarioId};

use super::file_io::{read_json, write_json_atomic};
use super::{read_lock, write_lock};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ScenarioData {
    scenarios: Vec<Scenario>,
}

/// Repository for scenario persistence
pub struct ScenarioRepository {
    path: PathBuf,
    data: RwLock<HashMap<ScenarioId, Scenario>>,
}

impl ScenarioRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    pub fn load(&self) -> HorizonResult<()> {
        let file_data: ScenarioData = read_json(&self.path)?;
        let mut data = write_lock(&self.data)?;
        data.clear();
        for scenario in file_data.scenarios {
            data.insert(scenario.id, scenario);
        }
        Ok(())
    }

    pub fn save(&self) -> HorizonResult<()> {
        let scenarios = self.get_all()?;
        write_json_atomic(&self.path, &ScenarioData { scenarios })
    }

    pub fn get(&self, id: ScenarioId) -> HorizonResult<Option<Scenario>> {
        Ok(read_lock(&self.data)?.get(&id).cloned())
    }

    /// All scenarios, newest first
    pub fn get_all(&self) -> HorizonResult<Vec<Scenario>> {
        let mut scenarios: Vec<_> = read_lock(&self.data)?.values().cloned().collect();
        scenarios.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(scenarios)
    }

    /// The seeded base scenario, if any
    pub fn get_base(&self) -> HorizonResult<Option<Scenario>> {
        Ok(read_lock(&self.data)?
            .values()
            .find(|s| s.is_base())
            .cloned())
    }

    /// Find a scenario by ID (full or short form) or by name (case-insensitive)
    pub fn find(&self, identifier: &str) -> HorizonResult<Option<Scenario>> {
        let data = read_lock(&self.data)?;
        if let Some(scenario) = data.values().find(|s| s.id.matches(identifier)) {
            return Ok(Some(scenario.clone()));
        }
        let name_lower = identifier.trim().to_lowercase();
        Ok(data
            .values()
            .find(|s| s.name.to_lowercase() == name_lower)
            .cloned())
    }

    pub fn upsert(&self, scenario: Scenario) -> HorizonResult<()> {
        write_lock(&self.data)?.insert(scenario.id, scenario);
        Ok(())
    }

    pub fn delete(&self, id: ScenarioId) -> HorizonResult<bool> {
        Ok(write_lock(&self.data)?.remove(&id).is_some())
    }

    pub fn count(&self) -> HorizonResult<usize> {
        Ok(read_lock(&self.data)?.len())
    }
}
