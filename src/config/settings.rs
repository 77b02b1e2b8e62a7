//! User settings for Horizon
//!
//! Manages user preferences including display formats and the defaults used
//! when building baselines and seeding scenarios.

use serde::{Deserialize, Serialize};

use super::paths::HorizonPaths;
use crate::error::HorizonError;

/// User settings for Horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Trailing months of history averaged into the baseline
    #[serde(default = "default_baseline_months")]
    pub baseline_months: u32,

    /// Horizon used for the seeded base scenario and as the CLI default
    #[serde(default = "default_horizon_years")]
    pub default_horizon_years: u8,

    /// Whether initial setup has been completed
    #[serde(default)]
    pub setup_completed: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_baseline_months() -> u32 {
    6
}

fn default_horizon_years() -> u8 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            baseline_months: default_baseline_months(),
            default_horizon_years: default_horizon_years(),
            setup_completed: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &HorizonPaths) -> Result<Self, HorizonError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                HorizonError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HorizonError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HorizonPaths) -> Result<(), HorizonError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            HorizonError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            HorizonError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Reject settings the projection engine cannot work with
    pub fn validate(&self) -> Result<(), HorizonError> {
        if self.baseline_months == 0 {
            return Err(HorizonError::Config(
                "baseline_months must be at least 1".into(),
            ));
        }
        if !(1..=10).contains(&self.default_horizon_years) {
            return Err(HorizonError::Config(
                "default_horizon_years must be between 1 and 10".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.baseline_months, 6);
        assert_eq!(settings.default_horizon_years, 5);
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HorizonPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.baseline_months = 3;
        settings.currency_symbol = "R$".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.baseline_months, 3);
        assert_eq!(loaded.currency_symbol, "R$");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "€"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.baseline_months, 6);
        assert_eq!(settings.default_horizon_years, 5);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = HorizonPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"baseline_months": 0}"#).unwrap();

        let result = Settings::load_or_create(&paths);
        assert!(matches!(result, Err(HorizonError::Config(_))));
    }
}
