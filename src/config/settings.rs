//! User settings for Runway
//!
//! Display and recommendation preferences, stored as `config.json`.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use super::paths::RunwayPaths;
use crate::error::RunwayError;
use crate::reports::projections::DEFAULT_SAVINGS_RATE;

/// User settings for Runway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for `lastUpdated` (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Share of the total budget recommended as savings
    #[serde(default = "default_savings_rate")]
    pub recommended_savings_rate: f64,
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

fn default_savings_rate() -> f64 {
    DEFAULT_SAVINGS_RATE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            recommended_savings_rate: default_savings_rate(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &RunwayPaths) -> Result<Self, RunwayError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| RunwayError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| RunwayError::Config(format!("Failed to parse settings file: {}", e)))?;

        if !(0.0..=1.0).contains(&settings.recommended_savings_rate) {
            return Err(RunwayError::Config(format!(
                "recommended_savings_rate must be between 0 and 1, got {}",
                settings.recommended_savings_rate
            )));
        }

        validate_date_format(&settings.date_format)?;

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RunwayPaths) -> Result<(), RunwayError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| RunwayError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

/// Reject strftime strings chrono cannot render
pub fn validate_date_format(format: &str) -> Result<(), RunwayError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(RunwayError::Config(format!(
            "date_format '{}' is not a valid strftime format",
            format
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.recommended_savings_rate, 0.20);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_rejects_out_of_range_rate() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"recommended_savings_rate": 3}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, RunwayError::Config(_)));
    }

    #[test]
    fn test_rejects_invalid_date_format() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RunwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%Q"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, RunwayError::Config(_)));
        assert!(err.to_string().contains("%Q"));
    }

    #[test]
    fn test_accepts_custom_date_format() {
        assert!(validate_date_format("%d/%m/%Y %H:%M").is_ok());
        assert!(validate_date_format("%Y-%m-%d").is_ok());
    }
}
