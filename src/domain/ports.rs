use crate::domain::model::{OrderColumns, RawRecord};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Loads a whole table into memory, in its natural row order.
pub trait RecordSource {
    fn load(&self) -> Result<Vec<RawRecord>>;
}

pub trait ConfigProvider: Validate {
    fn input_path(&self) -> &str;
    fn delimiter(&self) -> u8;
    fn columns(&self) -> OrderColumns;
    fn monitoring_enabled(&self) -> bool;
}

impl RecordSource for Vec<RawRecord> {
    fn load(&self) -> Result<Vec<RawRecord>> {
        Ok(self.clone())
    }
}
