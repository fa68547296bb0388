//! Configuration for the evaluation harness.
//!
//! Supports both environment variables and YAML config file.
//! Environment variables take precedence over config file values.

use crate::error::{EvalError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default base URL of the query API under evaluation.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default filename for the evaluation report, written next to the harness.
pub const DEFAULT_REPORT_FILENAME: &str = "evaluation_report.json";

/// Query API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service under evaluation (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Path the JSON report is written to
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,
}

fn default_report_path() -> PathBuf {
    PathBuf::from(DEFAULT_REPORT_FILENAME)
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            report_path: default_report_path(),
        }
    }
}

/// Minimum quality levels enforced after a run.
///
/// The constants are carried over from the original harness unchanged; a
/// score at or below the threshold is a violation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    /// Minimum average quality score per category.
    pub category_min: f64,
    /// Minimum quality score per individual query.
    pub query_min: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            category_min: 0.5,
            query_min: 0.3,
        }
    }
}

/// Full harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Query API settings
    pub api: ApiConfig,

    /// Pass/fail thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
}

/// Configuration file structure (YAML format).
#[derive(Debug, Deserialize)]
struct ConfigFile {
    api: Option<ApiFileSection>,
    thresholds: Option<ThresholdsFileSection>,
}

#[derive(Debug, Deserialize)]
struct ApiFileSection {
    base_url: Option<String>,
    report_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ThresholdsFileSection {
    category_min: Option<f64>,
    query_min: Option<f64>,
}

impl Config {
    /// Load configuration from environment variables and optional config file.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (EVAL_BASE_URL, EVAL_REPORT_PATH)
    /// 2. Config file (~/.config/query-eval/config.yaml)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        // Try to load from config file first
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                config = Self::load_from_file(&config_path)?;
            }
        }

        // Override with environment variables
        if let Ok(base_url) = env::var("EVAL_BASE_URL") {
            config.api.base_url = base_url;
        }

        if let Ok(report_path) = env::var("EVAL_REPORT_PATH") {
            config.api.report_path = PathBuf::from(report_path);
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| EvalError::io(path, e))?;

        let file_config: ConfigFile = serde_yaml::from_str(&content)
            .map_err(|e| EvalError::Config(format!("Failed to parse config file: {}", e)))?;

        let mut config = Config::default();

        if let Some(api) = file_config.api {
            if let Some(base_url) = api.base_url {
                config.api.base_url = base_url;
            }
            if let Some(report_path) = api.report_path {
                config.api.report_path = report_path;
            }
        }

        if let Some(thresholds) = file_config.thresholds {
            if let Some(category_min) = thresholds.category_min {
                config.thresholds.category_min = category_min;
            }
            if let Some(query_min) = thresholds.query_min {
                config.thresholds.query_min = query_min;
            }
        }

        Ok(config)
    }

    /// Get the default config file path.
    pub fn config_file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "query-eval")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Validate that required configuration is present.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.is_empty() {
            return Err(EvalError::Config(
                "API base URL is required. Set EVAL_BASE_URL environment variable or add to config file.".to_string()
            ));
        }

        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://") {
            return Err(EvalError::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                self.api.base_url
            )));
        }

        Ok(())
    }

    /// Create a config pointing at an explicit base URL (useful for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
                ..Default::default()
            },
            thresholds: Thresholds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(
            config.api.report_path,
            PathBuf::from("evaluation_report.json")
        );
        assert_eq!(config.thresholds.category_min, 0.5);
        assert_eq!(config.thresholds.query_min, 0.3);
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = String::new();
        assert!(config.validate().is_err());

        config.api.base_url = "localhost:8000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_with_base_url() {
        let config = Config::with_base_url("http://api.example.com");
        assert_eq!(config.api.base_url, "http://api.example.com");
        assert!(config.validate().is_ok());
    }
}
