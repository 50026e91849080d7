pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::csv_source::CsvFileSource;
pub use config::toml_config::TomlConfig;
pub use crate::core::{
    engine::DqEngine,
    reporter::run_batch,
    validator::{validate, validate_default},
};
pub use domain::model::{
    OrderColumns, RawRecord, RejectReason, SummaryReport, ValidatedOrder, ValidationOutcome,
};
pub use utils::error::{DqError, Result};
