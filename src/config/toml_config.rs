use crate::config::{DEFAULT_DELIMITER, DEFAULT_INPUT_PATH};
use crate::domain::model::OrderColumns;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DqError, Result};
use crate::utils::validation::{self, Validate, TABLE_EXTENSIONS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    pub columns: Option<OrderColumns>,
    pub monitoring: Option<MonitoringConfig>,
}

/// Both settings are optional; `path` falls back to `data/amazon_orders.csv`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: Option<String>,
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DqError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DqError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn override_input(&mut self, path: impl Into<String>) {
        self.source.path = Some(path.into());
    }

    pub fn override_delimiter(&mut self, delimiter: impl Into<String>) {
        self.source.delimiter = Some(delimiter.into());
    }

    pub fn override_monitoring(&mut self, enabled: bool) {
        self.monitoring = Some(MonitoringConfig { enabled });
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.source.path.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn delimiter(&self) -> u8 {
        self.source
            .delimiter
            .as_deref()
            .and_then(|d| d.as_bytes().first().copied())
            .unwrap_or(DEFAULT_DELIMITER)
    }

    fn columns(&self) -> OrderColumns {
        self.columns.clone().unwrap_or_default()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        let path = self.input_path();
        validation::validate_path("source.path", path)?;
        validation::validate_file_extension("source.path", path, &TABLE_EXTENSIONS)?;

        if let Some(delimiter) = &self.source.delimiter {
            validation::validate_delimiter("source.delimiter", delimiter)?;
        }
        if let Some(columns) = &self.columns {
            validation::validate_columns("columns", columns)?;
        }
        Ok(())
    }
}
