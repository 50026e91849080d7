use crate::domain::model::RawRecord;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use serde_json::Value;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Cell contents read as a missing value, as common dataframe loaders do.
pub const NULL_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads a delimited file with a header row, fully into memory.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse rows from any reader. Each row is keyed by header name.
    ///
    /// Short rows leave their trailing columns absent, cells past the header
    /// are dropped, and a repeated header name keeps its first column.
    pub fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<RawRecord>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let mut records = Vec::new();

        for (line, result) in csv_reader.records().enumerate() {
            let row = result?;
            if row.len() != headers.len() {
                tracing::debug!(
                    "Row {} has {} cells, header has {}",
                    line,
                    row.len(),
                    headers.len()
                );
            }

            let mut record = RawRecord::new();
            for (header, cell) in headers.iter().zip(row.iter()) {
                if record.get(header).is_none() {
                    record.insert(header, cell_value(cell));
                }
            }
            records.push(record);
        }

        Ok(records)
    }
}

fn cell_value(cell: &str) -> Value {
    if NULL_TOKENS.contains(&cell) {
        Value::Null
    } else {
        Value::String(cell.to_string())
    }
}

impl RecordSource for CsvFileSource {
    fn load(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("Reading order table from {}", self.path.display());
        let file = File::open(&self.path)?;
        Self::read_records(file, self.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rows_are_keyed_by_header() {
        let data = "Order ID,Qty,Amount\nORD1,2,100.0\nORD2,3,5\n";
        let records = CsvFileSource::read_records(data.as_bytes(), b',').unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("Order ID"), Some(&json!("ORD1")));
        assert_eq!(records[1].get("Amount"), Some(&json!("5")));
    }

    #[test]
    fn test_empty_and_na_cells_become_null() {
        let data = "Order ID,Qty,currency\n,NA,INR\nORD2,nan,N/A\n";
        let records = CsvFileSource::read_records(data.as_bytes(), b',').unwrap();

        assert_eq!(records[0].get("Order ID"), Some(&Value::Null));
        assert_eq!(records[0].get("Qty"), Some(&Value::Null));
        assert_eq!(records[0].get("currency"), Some(&json!("INR")));
        assert_eq!(records[1].get("currency"), Some(&Value::Null));
    }

    #[test]
    fn test_ragged_rows() {
        let data = "a,b,c\n1\n1,2,3,4\n";
        let records = CsvFileSource::read_records(data.as_bytes(), b',').unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("a"), Some(&json!("1")));
        assert!(records[0].get("b").is_none());
        assert_eq!(records[1].data.len(), 3);
    }

    #[test]
    fn test_duplicate_header_keeps_first() {
        let data = "Date,Date\n03-01-24,garbage\n";
        let records = CsvFileSource::read_records(data.as_bytes(), b',').unwrap();
        assert_eq!(records[0].get("Date"), Some(&json!("03-01-24")));
    }

    #[test]
    fn test_tab_delimiter() {
        let data = "Order ID\tQty\nORD1\t2\n";
        let records = CsvFileSource::read_records(data.as_bytes(), b'\t').unwrap();
        assert_eq!(records[0].get("Qty"), Some(&json!("2")));
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let records = CsvFileSource::read_records("Order ID,Qty\n".as_bytes(), b',').unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = CsvFileSource::new("does/not/exist.csv");
        let err = source.load().unwrap_err();
        assert!(matches!(err, crate::utils::error::DqError::IoError(_)));
    }
}
