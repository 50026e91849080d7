use crate::domain::model::{OrderColumns, OrderField};
use crate::utils::error::{DqError, Result};
use std::collections::HashSet;

pub const TABLE_EXTENSIONS: [&str; 3] = ["csv", "tsv", "txt"];

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DqError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DqError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension.to_ascii_lowercase().as_str()) => Ok(()),
        Some(extension) => Err(DqError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(DqError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DqError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// The csv reader only takes single-byte delimiters.
pub fn validate_delimiter(field_name: &str, delimiter: &str) -> Result<u8> {
    match delimiter.as_bytes() {
        [byte] if byte.is_ascii() && *byte != b'"' && *byte != b'\n' && *byte != b'\r' => Ok(*byte),
        _ => Err(DqError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: delimiter.to_string(),
            reason: "Delimiter must be a single ASCII character other than a quote or newline"
                .to_string(),
        }),
    }
}

pub fn validate_columns(field_name: &str, columns: &OrderColumns) -> Result<()> {
    let mut seen = HashSet::new();
    for field in OrderField::ALL {
        let column = columns.column(field);
        let qualified = format!("{}.{}", field_name, field);
        validate_non_empty_string(&qualified, column)?;
        if !seen.insert(column) {
            return Err(DqError::InvalidConfigValueError {
                field: qualified,
                value: column.to_string(),
                reason: "Column is already mapped to another field".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("source.path", "data/amazon_orders.csv").is_ok());
        assert!(validate_path("source.path", "").is_err());
        assert!(validate_path("source.path", "bad\0path.csv").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("source.path", "orders.csv", &TABLE_EXTENSIONS).is_ok());
        assert!(validate_file_extension("source.path", "ORDERS.TSV", &TABLE_EXTENSIONS).is_ok());
        assert!(validate_file_extension("source.path", "orders.xlsx", &TABLE_EXTENSIONS).is_err());
        assert!(validate_file_extension("source.path", "orders", &TABLE_EXTENSIONS).is_err());
    }

    #[test]
    fn test_validate_delimiter() {
        assert_eq!(validate_delimiter("source.delimiter", ",").unwrap(), b',');
        assert_eq!(validate_delimiter("source.delimiter", "\t").unwrap(), b'\t');
        assert!(validate_delimiter("source.delimiter", "").is_err());
        assert!(validate_delimiter("source.delimiter", ";;").is_err());
        assert!(validate_delimiter("source.delimiter", "\"").is_err());
        assert!(validate_delimiter("source.delimiter", "€").is_err());
    }

    #[test]
    fn test_validate_columns() {
        assert!(validate_columns("columns", &OrderColumns::default()).is_ok());

        let blank = OrderColumns {
            date: " ".to_string(),
            ..OrderColumns::default()
        };
        assert!(validate_columns("columns", &blank).is_err());

        let duplicate = OrderColumns {
            amount: "Qty".to_string(),
            ..OrderColumns::default()
        };
        assert!(validate_columns("columns", &duplicate).is_err());
    }

}
