use crate::core::validator::validate;
use crate::domain::model::{OrderColumns, RawRecord, SummaryReport, ValidationOutcome};

/// Validate every row in order and tally the outcomes.
///
/// Never stops early. `total_rows` comes from the input length, not from the
/// tally.
pub fn run_batch(rows: &[RawRecord], columns: &OrderColumns) -> SummaryReport {
    let mut valid_rows = 0usize;
    let mut invalid_rows = 0usize;

    for (index, row) in rows.iter().enumerate() {
        match validate(row, columns) {
            ValidationOutcome::Accepted(order) => {
                valid_rows += 1;
                tracing::trace!("Row {} accepted: {}", index, order.order_id);
            }
            ValidationOutcome::Rejected(reason) => {
                invalid_rows += 1;
                tracing::debug!("Row {} rejected: {}", index, reason);
            }
        }
    }

    let report = SummaryReport::from_counts(rows.len(), valid_rows);
    debug_assert_eq!(report.invalid_rows(), invalid_rows);

    tracing::info!(
        "Validated {} rows: {} valid, {} invalid",
        report.total_rows(),
        report.valid_rows(),
        report.invalid_rows()
    );
    report
}
