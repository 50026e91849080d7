pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use crate::domain::model::OrderColumns;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate, TABLE_EXTENSIONS};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "data/amazon_orders.csv";
pub const DEFAULT_DELIMITER: u8 = b',';

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "order-dq")]
#[command(about = "Validate an order table and report pass/fail counts")]
pub struct CliConfig {
    /// Order table to validate [default: data/amazon_orders.csv]
    #[arg(short, long)]
    pub input: Option<String>,

    /// Field delimiter of the input table [default: ,]
    #[arg(long)]
    pub delimiter: Option<String>,

    /// TOML configuration file; --input, --delimiter and --monitor override it
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Pick the effective configuration.
    ///
    /// Without `--config` the flags are used as-is. With it, the TOML file is
    /// loaded and any flag given on the command line replaces its setting.
    pub fn resolve(&self) -> Result<Box<dyn ConfigProvider>> {
        let Some(path) = &self.config else {
            return Ok(Box::new(self.clone()));
        };

        tracing::info!("📁 Loading configuration from: {}", path);
        let mut config = TomlConfig::from_file(path)?;

        if let Some(input) = &self.input {
            tracing::info!("🔧 Input overridden to: {}", input);
            config.override_input(input.clone());
        }
        if let Some(delimiter) = &self.delimiter {
            tracing::info!("🔧 Delimiter overridden to: {:?}", delimiter);
            config.override_delimiter(delimiter.clone());
        }
        if self.monitor {
            config.override_monitoring(true);
        }
        Ok(Box::new(config))
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn delimiter(&self) -> u8 {
        self.delimiter
            .as_deref()
            .and_then(|d| d.as_bytes().first().copied())
            .unwrap_or(DEFAULT_DELIMITER)
    }

    fn columns(&self) -> OrderColumns {
        OrderColumns::default()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", self.input_path())?;
        validation::validate_file_extension("input", self.input_path(), &TABLE_EXTENSIONS)?;
        if let Some(delimiter) = &self.delimiter {
            validation::validate_delimiter("delimiter", delimiter)?;
        }
        Ok(())
    }
}
