use clap::Parser;
use order_dq::domain::ports::ConfigProvider;
use order_dq::utils::logger;
use order_dq::utils::validation::Validate;
use order_dq::{CliConfig, CsvFileSource, DqEngine, DqError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting order-dq");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => return fatal(&e),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return fatal(&e);
    }

    let monitor_enabled = config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let source = CsvFileSource::new(config.input_path()).with_delimiter(config.delimiter());
    tracing::info!("📁 Input: {}", source.path().display());
    let engine = DqEngine::new_with_monitoring(source, config.columns(), monitor_enabled);

    match engine.run() {
        Ok(report) => {
            report.print();
            ExitCode::from(report.exit_code())
        }
        Err(e) => {
            tracing::error!("❌ Validation run aborted: {}", e);
            fatal(&e)
        }
    }
}

fn fatal(e: &DqError) -> ExitCode {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    ExitCode::from(e.exit_code())
}
