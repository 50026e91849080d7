pub mod engine;
pub mod reporter;
pub mod validator;

pub use crate::domain::model::{RawRecord, SummaryReport, ValidationOutcome};
pub use crate::domain::ports::{ConfigProvider, RecordSource};
pub use crate::utils::error::Result;
