use order_dq::domain::ports::{ConfigProvider, RecordSource};
use order_dq::utils::validation::Validate;
use order_dq::{CsvFileSource, DqEngine, DqError, OrderColumns, TomlConfig};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const HEADER: &str = "index,Order ID,Date,Status,Qty,currency,Amount,ship-city,ship-country";

fn write_table(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_end_to_end_mixed_table() {
    let temp_dir = TempDir::new().unwrap();
    let body = format!(
        "{}\n\
         0,ORD1,03-01-24,Shipped,2,INR,100.0,MUMBAI,IN\n\
         1,ORD1,03-01-24,Shipped,2,USD,100.0,MUMBAI,IN\n\
         2,ORD1,03-01-24,Shipped,-1,INR,100.0,MUMBAI,IN\n",
        HEADER
    );
    let path = write_table(&temp_dir, "orders.csv", &body);

    let engine = DqEngine::new(CsvFileSource::new(&path), OrderColumns::default());
    let report = engine.run().unwrap();

    assert_eq!(report.total_rows(), 3);
    assert_eq!(report.valid_rows(), 1);
    assert_eq!(report.invalid_rows(), 2);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_end_to_end_header_only_table_passes() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_table(&temp_dir, "orders.csv", &format!("{}\n", HEADER));

    let report = DqEngine::new(CsvFileSource::new(&path), OrderColumns::default())
        .run()
        .unwrap();

    assert_eq!(report.total_rows(), 0);
    assert!(report.all_valid());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_blank_and_short_rows_are_invalid_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let body = format!(
        "{}\n\
         0,ORD1,03-01-24,Shipped,2,INR,100.0,MUMBAI,IN\n\
         1,,03-01-24,Shipped,2,INR,100.0,MUMBAI,IN\n\
         2,ORD3,03-01-24,Shipped,NA,INR,100.0,MUMBAI,IN\n\
         3,ORD4,03-01-24\n",
        HEADER
    );
    let path = write_table(&temp_dir, "orders.csv", &body);

    let rows = CsvFileSource::new(&path).load().unwrap();
    assert_eq!(rows.len(), 4);

    let report = DqEngine::new(rows, OrderColumns::default()).run().unwrap();
    assert_eq!(report.valid_rows(), 1);
    assert_eq!(report.invalid_rows(), 3);
}

#[test]
fn test_missing_column_rejects_every_row() {
    let temp_dir = TempDir::new().unwrap();
    let body = "Order ID,Date,Qty,currency,Amount\n\
                ORD1,03-01-24,2,INR,100.0\n\
                ORD2,03-02-24,1,INR,50.0\n";
    let path = write_table(&temp_dir, "orders.csv", body);

    let report = DqEngine::new(CsvFileSource::new(&path), OrderColumns::default())
        .run()
        .unwrap();
    assert_eq!(report.total_rows(), 2);
    assert_eq!(report.invalid_rows(), 2);
}

#[test]
fn test_missing_file_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let engine = DqEngine::new(
        CsvFileSource::new(temp_dir.path().join("absent.csv")),
        OrderColumns::default(),
    );

    assert!(matches!(engine.run(), Err(DqError::IoError(_))));
}

#[test]
fn test_toml_config_drives_source_and_columns() {
    let temp_dir = TempDir::new().unwrap();
    let body = "order\tday\tQty\tcurrency\tAmount\tship-country\n\
                A-1\t11-02-23\t1\tINR\t12.5\tIN\n\
                A-2\t11-31-23\t1\tINR\t12.5\tIN\n";
    let table = write_table(&temp_dir, "orders.tsv", body);

    let mut config_file = NamedTempFile::new().unwrap();
    write!(
        config_file,
        "[source]\npath = {:?}\ndelimiter = \"\\t\"\n\n[columns]\norder_id = \"order\"\ndate = \"day\"\n",
        table.to_str().unwrap()
    )
    .unwrap();

    let config = TomlConfig::from_file(config_file.path()).unwrap();
    let source = CsvFileSource::new(config.input_path()).with_delimiter(config.delimiter());
    let report = DqEngine::new(source, config.columns()).run().unwrap();

    // November has 30 days.
    assert_eq!(report.total_rows(), 2);
    assert_eq!(report.valid_rows(), 1);
    assert_eq!(report.invalid_rows(), 1);
}

#[cfg(feature = "cli")]
#[test]
fn test_delimiter_flag_overrides_toml_config() {
    use clap::Parser;
    use order_dq::CliConfig;

    let temp_dir = TempDir::new().unwrap();
    let table = write_table(
        &temp_dir,
        "semi.txt",
        "Order ID;Qty;Amount;currency;ship-country;Date\nORD1;2;100.0;INR;IN;03-01-24\n",
    );
    let config_path = write_table(
        &temp_dir,
        "order-dq.toml",
        &format!("[source]\npath = {:?}\n", table.to_str().unwrap()),
    );

    let cli = CliConfig::parse_from([
        "order-dq",
        "--config",
        config_path.to_str().unwrap(),
        "--delimiter",
        ";",
    ]);
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => panic!("config should resolve: {}", e),
    };
    assert!(config.validate().is_ok());

    let source = CsvFileSource::new(config.input_path()).with_delimiter(config.delimiter());
    let report = DqEngine::new(source, config.columns()).run().unwrap();

    assert_eq!(report.valid_rows(), 1);
    assert_eq!(report.invalid_rows(), 0);
    assert_eq!(report.exit_code(), 0);
}
