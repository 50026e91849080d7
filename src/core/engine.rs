use crate::core::reporter::run_batch;
use crate::core::RecordSource;
use crate::domain::model::{OrderColumns, SummaryReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Loads the whole table, then runs the batch over it.
///
/// Printing the summary and choosing the exit status stay with the caller.
pub struct DqEngine<S: RecordSource> {
    source: S,
    columns: OrderColumns,
    monitor: SystemMonitor,
}

impl<S: RecordSource> DqEngine<S> {
    pub fn new(source: S, columns: OrderColumns) -> Self {
        Self::new_with_monitoring(source, columns, false)
    }

    pub fn new_with_monitoring(source: S, columns: OrderColumns, monitor_enabled: bool) -> Self {
        Self {
            source,
            columns,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<SummaryReport> {
        tracing::info!("Loading order records...");
        let rows = self.source.load()?;
        tracing::info!("Loaded {} rows", rows.len());
        self.monitor.log_stats("Load");

        let report = run_batch(&rows, &self.columns);
        self.monitor.log_stats("Validate");

        if report.all_valid() {
            tracing::info!("All {} rows passed validation", report.total_rows());
        } else {
            tracing::warn!(
                "{} of {} rows failed validation",
                report.invalid_rows(),
                report.total_rows()
            );
        }

        self.monitor.log_final_stats();
        Ok(report)
    }
}
