use thiserror::Error;

/// Process status when the run cannot produce a summary at all.
pub const FATAL_EXIT_CODE: u8 = 2;

/// Fatal errors. Row-level rule violations never end up here.
#[derive(Error, Debug)]
pub enum DqError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value {value:?} for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DqError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            DqError::ConfigError { .. }
                | DqError::ConfigValidationError { .. }
                | DqError::InvalidConfigValueError { .. }
        )
    }

    /// Distinct from the 1 used for a table with invalid rows.
    pub fn exit_code(&self) -> u8 {
        FATAL_EXIT_CODE
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DqError::CsvError(e) => format!("Could not read the order table: {}", e),
            DqError::IoError(e) => format!("Could not open the order table: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DqError::CsvError(_) => {
                "Check that the file is a delimited table with a header row and the configured delimiter"
            }
            DqError::IoError(_) => "Check that the input path exists and is readable",
            DqError::ConfigError { .. } | DqError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            DqError::InvalidConfigValueError { .. } => "Fix the reported configuration value",
        }
    }
}

pub type Result<T> = std::result::Result<T, DqError>;
