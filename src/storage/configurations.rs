//! Behavior configuration repository for JSON storage
//!
//! Configurations are kept in insertion order: when two configurations
//! target the same category, the earlier one wins during projection.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::HorizonResult;
use crate::models::{BehaviorConfiguration, ConfigurationId, ScenarioId};

use super::file_io::{read_json, write_json_atomic};
use super::{read_lock, write_lock};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ConfigurationData {
    configurations: Vec<BehaviorConfiguration>,
}

/// Repository for behavior configuration persistence
pub struct ConfigurationRepository {
    path: PathBuf,
    data: RwLock<Vec<BehaviorConfiguration>>,
}

impl ConfigurationRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn load(&self) -> HorizonResult<()> {
        let file_data: ConfigurationData = read_json(&self.path)?;
        *write_lock(&self.data)? = file_data.configurations;
        Ok(())
    }

    pub fn save(&self) -> HorizonResult<()> {
        let configurations = read_lock(&self.data)?.clone();
        write_json_atomic(&self.path, &ConfigurationData { configurations })
    }

    pub fn get(&self, id: ConfigurationId) -> HorizonResult<Option<BehaviorConfiguration>> {
        Ok(read_lock(&self.data)?.iter().find(|c| c.id == id).cloned())
    }

    /// Find a configuration by full or short ID
    pub fn find(&self, identifier: &str) -> HorizonResult<Option<BehaviorConfiguration>> {
        Ok(read_lock(&self.data)?
            .iter()
            .find(|c| c.id.matches(identifier))
            .cloned())
    }

    /// Configurations for one scenario, in insertion order
    pub fn get_by_scenario(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<BehaviorConfiguration>> {
        Ok(read_lock(&self.data)?
            .iter()
            .filter(|c| c.scenario_id == scenario_id)
            .cloned()
            .collect())
    }

    /// Insert a new configuration at the end, or replace one in place
    pub fn upsert(&self, configuration: BehaviorConfiguration) -> HorizonResult<()> {
        let mut data = write_lock(&self.data)?;
        match data.iter_mut().find(|c| c.id == configuration.id) {
            Some(existing) => *existing = configuration,
            None => data.push(configuration),
        }
        Ok(())
    }

    pub fn delete(&self, id: ConfigurationId) -> HorizonResult<bool> {
        let mut data = write_lock(&self.data)?;
        let before = data.len();
        data.retain(|c| c.id != id);
        Ok(data.len() != before)
    }

    /// Remove every configuration of a scenario, returning what was removed
    pub fn delete_by_scenario(&self, scenario_id: ScenarioId) -> HorizonResult<Vec<BehaviorConfiguration>> {
        let mut data = write_lock(&self.data)?;
        let (removed, kept): (Vec<_>, Vec<_>) =
            data.drain(..).partition(|c| c.scenario_id == scenario_id);
        *data = kept;
        Ok(removed)
    }

    pub fn count(&self) -> HorizonResult<usize> {
        Ok(read_lock(&self.data)?.len())
    }
}
