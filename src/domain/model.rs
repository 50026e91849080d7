use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const SUMMARY_BANNER: &str = "========== DATA QUALITY SUMMARY ==========";
pub const SUMMARY_RULE: &str = "==========================================";
pub const PASS_BANNER: &str = "✅ Data validation passed.";
pub const FAIL_BANNER: &str = "❌ Data validation failed.";

/// One untyped row from the input table, addressed by column name.
///
/// A column the source did not provide for this row is simply absent from
/// `data`; an empty cell is stored as `Value::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub data: HashMap<String, serde_json::Value>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for fixtures.
    pub fn with(mut self, column: &str, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(column.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: serde_json::Value) {
        self.data.insert(column.into(), value);
    }

    pub fn get(&self, column: &str) -> Option<&serde_json::Value> {
        self.data.get(column)
    }
}

/// Header names of the six recognized columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderColumns {
    pub order_id: String,
    pub quantity: String,
    pub amount: String,
    pub currency: String,
    pub ship_country: String,
    pub date: String,
}

impl Default for OrderColumns {
    fn default() -> Self {
        Self {
            order_id: "Order ID".to_string(),
            quantity: "Qty".to_string(),
            amount: "Amount".to_string(),
            currency: "currency".to_string(),
            ship_country: "ship-country".to_string(),
            date: "Date".to_string(),
        }
    }
}

impl OrderColumns {
    pub fn column(&self, field: OrderField) -> &str {
        match field {
            OrderField::OrderId => &self.order_id,
            OrderField::Quantity => &self.quantity,
            OrderField::Amount => &self.amount,
            OrderField::Currency => &self.currency,
            OrderField::ShipCountry => &self.ship_country,
            OrderField::Date => &self.date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    OrderId,
    Quantity,
    Amount,
    Currency,
    ShipCountry,
    Date,
}

impl OrderField {
    /// Evaluation order of the row rules.
    pub const ALL: [OrderField; 6] = [
        OrderField::OrderId,
        OrderField::Quantity,
        OrderField::Amount,
        OrderField::Currency,
        OrderField::ShipCountry,
        OrderField::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::OrderId => "order_id",
            OrderField::Quantity => "quantity",
            OrderField::Amount => "amount",
            OrderField::Currency => "currency",
            OrderField::ShipCountry => "ship_country",
            OrderField::Date => "date",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record that satisfied every order rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedOrder {
    pub order_id: String,
    pub quantity: i64,
    pub amount: f64,
    pub currency: String,
    pub ship_country: String,
    pub date: String,
}

/// First rule a rejected row broke. Only ever logged, never summarized.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RejectReason {
    #[error("{field} is missing")]
    Missing { field: OrderField },

    #[error("{field} is empty")]
    Empty { field: OrderField },

    #[error("{field} is not text: {value}")]
    NotText {
        field: OrderField,
        value: serde_json::Value,
    },

    #[error("{field} is not an integer: {value}")]
    NotAnInteger {
        field: OrderField,
        value: serde_json::Value,
    },

    #[error("{field} is not a number: {value}")]
    NotANumber {
        field: OrderField,
        value: serde_json::Value,
    },

    #[error("{field} must be >= 0, got {value}")]
    Negative { field: OrderField, value: f64 },

    #[error("{field} must be {expected:?}, got {value:?}")]
    UnexpectedValue {
        field: OrderField,
        expected: &'static str,
        value: String,
    },

    #[error("date {value:?} does not match MM-DD-YY")]
    BadDate { value: String },
}

impl RejectReason {
    pub fn field(&self) -> OrderField {
        match self {
            RejectReason::Missing { field }
            | RejectReason::Empty { field }
            | RejectReason::NotText { field, .. }
            | RejectReason::NotAnInteger { field, .. }
            | RejectReason::NotANumber { field, .. }
            | RejectReason::Negative { field, .. }
            | RejectReason::UnexpectedValue { field, .. } => *field,
            RejectReason::BadDate { .. } => OrderField::Date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Accepted(ValidatedOrder),
    Rejected(RejectReason),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }
}

impl From<Result<ValidatedOrder, RejectReason>> for ValidationOutcome {
    fn from(result: Result<ValidatedOrder, RejectReason>) -> Self {
        match result {
            Ok(order) => ValidationOutcome::Accepted(order),
            Err(reason) => ValidationOutcome::Rejected(reason),
        }
    }
}

/// Aggregate counts for one batch pass.
///
/// Fields are private so `valid_rows + invalid_rows == total_rows` cannot be
/// broken after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    total_rows: usize,
    valid_rows: usize,
    invalid_rows: usize,
}

impl SummaryReport {
    /// Rows the tally did not see as accepted are counted as invalid.
    pub(crate) fn from_counts(total_rows: usize, valid_rows: usize) -> Self {
        let valid_rows = valid_rows.min(total_rows);
        Self {
            total_rows,
            valid_rows,
            invalid_rows: total_rows - valid_rows,
        }
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn valid_rows(&self) -> usize {
        self.valid_rows
    }

    pub fn invalid_rows(&self) -> usize {
        self.invalid_rows
    }

    pub fn all_valid(&self) -> bool {
        self.invalid_rows == 0
    }

    pub fn exit_code(&self) -> u8 {
        if self.all_valid() {
            0
        } else {
            1
        }
    }

    pub fn render(&self) -> String {
        let banner = if self.all_valid() {
            PASS_BANNER
        } else {
            FAIL_BANNER
        };

        [
            SUMMARY_BANNER.to_string(),
            format!("Total Rows: {}", self.total_rows),
            format!("Valid Rows: {}", self.valid_rows),
            format!("Invalid Rows: {}", self.invalid_rows),
            SUMMARY_RULE.to_string(),
            banner.to_string(),
        ]
        .join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}
