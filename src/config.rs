//! Configuration management module.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration load result.
#[derive(Debug)]
pub enum ConfigLoadResult {
    /// Config loaded successfully.
    Loaded(AppConfig),
    /// Config file missing (first run).
    Missing,
    /// Config file exists but invalid.
    Invalid(ConfigError),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub period: PeriodConfig,
    pub payroll: PayrollConfig,
    pub thresholds: ThresholdConfig,
    pub vocabulary: StatusVocabulary,
}

/// Pay period covered by the recap (both ends inclusive).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodConfig {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Language of the month names in the period heading.
    pub caption_language: CaptionLanguage,
}

/// Month-name language for the period heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionLanguage {
    #[default]
    English,
    Indonesian,
}

/// Meal allowance and deduction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Days off that are not counted as absence.
    pub paid_leave_days: i64,
    pub total_workdays: i64,
    /// Flat deduction per day clocked in inside the late window.
    pub late_flat_fee: i64,
    /// Daily meal allowance for departments not listed below.
    pub meal_allowance: i64,
    pub reduced_meal_allowance: i64,
    pub reduced_rate_departments: Vec<String>,
    pub currency_prefix: String,
}

/// Clock-in time boundaries, all inclusive lower bounds except the cutoff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    #[serde(with = "hhmm")]
    pub late_from: NaiveTime,
    #[serde(with = "hhmm")]
    pub very_late_from: NaiveTime,
    /// Latest clock-in still accepted as a morning entry.
    #[serde(with = "hhmm")]
    pub clock_in_cutoff: NaiveTime,
}

/// Literal values used by the scanner export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusVocabulary {
    pub clock_in: String,
    pub clock_out: String,
    pub approved: String,
}

impl AppConfig {
    /// Get config file path (same directory as executable).
    pub fn default_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Attempt to load config with detailed result.
    pub fn try_load(path: &Path) -> ConfigLoadResult {
        if !path.exists() {
            return ConfigLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => match config.validate() {
                    Ok(()) => ConfigLoadResult::Loaded(config),
                    Err(e) => ConfigLoadResult::Invalid(e),
                },
                Err(e) => ConfigLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => ConfigLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period.end < self.period.start {
            return Err(ConfigError::Validation(
                "Period end cannot be before period start".to_string(),
            ));
        }
        if self.payroll.paid_leave_days < 0 {
            return Err(ConfigError::Validation("Paid leave days cannot be negative".to_string()));
        }
        if self.payroll.paid_leave_days > self.payroll.total_workdays {
            return Err(ConfigError::Validation(
                "Paid leave days cannot exceed total workdays".to_string(),
            ));
        }
        if self.payroll.late_flat_fee < 0
            || self.payroll.meal_allowance < 0
            || self.payroll.reduced_meal_allowance < 0
        {
            return Err(ConfigError::Validation("Amounts cannot be negative".to_string()));
        }
        if self.thresholds.late_from >= self.thresholds.very_late_from {
            return Err(ConfigError::Validation(
                "Late threshold must be earlier than very-late threshold".to_string(),
            ));
        }
        let vocab = &self.vocabulary;
        if [&vocab.clock_in, &vocab.clock_out, &vocab.approved]
            .iter()
            .any(|v| v.trim().is_empty())
        {
            return Err(ConfigError::Validation("Status vocabulary cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl PayrollConfig {
    /// Daily meal allowance for a department (exact, case-sensitive match).
    pub fn meal_allowance_for(&self, department: &str) -> i64 {
        if self.reduced_rate_departments.iter().any(|d| d == department) {
            self.reduced_meal_allowance
        } else {
            self.meal_allowance
        }
    }
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2024, 8, 21).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 9, 20).unwrap_or_default(),
            caption_language: CaptionLanguage::default(),
        }
    }
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            paid_leave_days: 5,
            total_workdays: 31,
            late_flat_fee: 5000,
            meal_allowance: 25000,
            reduced_meal_allowance: 20000,
            reduced_rate_departments: vec!["ADMIN".to_string(), "GUDANG".to_string()],
            currency_prefix: "Rp. ".to_string(),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            late_from: NaiveTime::from_hms_opt(8, 16, 0).unwrap_or_default(),
            very_late_from: NaiveTime::from_hms_opt(8, 31, 0).unwrap_or_default(),
            clock_in_cutoff: NaiveTime::from_hms_opt(11, 59, 0).unwrap_or_default(),
        }
    }
}

impl Default for StatusVocabulary {
    fn default() -> Self {
        Self {
            clock_in: "C/Masuk".to_string(),
            clock_out: "C/Keluar".to_string(),
            approved: "OK".to_string(),
        }
    }
}

/// `HH:MM` string form for thresholds in the TOML file.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(serde::de::Error::custom)
    }
}
