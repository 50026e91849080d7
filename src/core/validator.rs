use crate::domain::model::{
    OrderColumns, OrderField, RawRecord, RejectReason, ValidatedOrder, ValidationOutcome,
};
use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

pub const EXPECTED_CURRENCY: &str = "INR";
pub const EXPECTED_SHIP_COUNTRY: &str = "IN";
pub const DATE_FORMAT: &str = "%m-%d-%y";

fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^\d{2}-\d{2}-\d{2}$").expect("date pattern is valid"))
}

/// Decide whether one row forms a valid order.
///
/// Rules run in a fixed order and the first broken one becomes the
/// rejection reason. Columns not named in `columns` are ignored.
pub fn validate(record: &RawRecord, columns: &OrderColumns) -> ValidationOutcome {
    check_order(record, columns).into()
}

/// [`validate`] with the standard source headers.
pub fn validate_default(record: &RawRecord) -> ValidationOutcome {
    validate(record, &OrderColumns::default())
}

fn check_order(record: &RawRecord, columns: &OrderColumns) -> Result<ValidatedOrder, RejectReason> {
    let field = |f: OrderField| record.get(columns.column(f));

    let order_id = check_order_id(field(OrderField::OrderId))?;
    let quantity = check_quantity(field(OrderField::Quantity))?;
    let amount = check_amount(field(OrderField::Amount))?;
    let currency = check_literal(
        OrderField::Currency,
        field(OrderField::Currency),
        EXPECTED_CURRENCY,
    )?;
    let ship_country = check_literal(
        OrderField::ShipCountry,
        field(OrderField::ShipCountry),
        EXPECTED_SHIP_COUNTRY,
    )?;
    let date = check_date(field(OrderField::Date))?;

    Ok(ValidatedOrder {
        order_id,
        quantity,
        amount,
        currency,
        ship_country,
        date,
    })
}

/// Absent columns and null cells both count as missing.
fn present(field: OrderField, value: Option<&Value>) -> Result<&Value, RejectReason> {
    match value {
        None | Some(Value::Null) => Err(RejectReason::Missing { field }),
        Some(v) => Ok(v),
    }
}

fn text(field: OrderField, value: Option<&Value>) -> Result<&str, RejectReason> {
    match present(field, value)? {
        Value::String(s) => Ok(s.as_str()),
        other => Err(RejectReason::NotText {
            field,
            value: other.clone(),
        }),
    }
}

fn check_order_id(value: Option<&Value>) -> Result<String, RejectReason> {
    let field = OrderField::OrderId;
    let id = text(field, value)?;
    if id.is_empty() {
        return Err(RejectReason::Empty { field });
    }
    Ok(id.to_string())
}

fn check_quantity(value: Option<&Value>) -> Result<i64, RejectReason> {
    let field = OrderField::Quantity;
    let raw = present(field, value)?;
    let quantity = match raw {
        Value::Number(n) => n.as_i64(),
        // Strict: "2.0" and "2e0" are not integers.
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
    .ok_or_else(|| RejectReason::NotAnInteger {
        field,
        value: raw.clone(),
    })?;

    if quantity < 0 {
        return Err(RejectReason::Negative {
            field,
            value: quantity as f64,
        });
    }
    Ok(quantity)
}

fn check_amount(value: Option<&Value>) -> Result<f64, RejectReason> {
    let field = OrderField::Amount;
    let raw = present(field, value)?;
    let amount = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|a| a.is_finite())
    .ok_or_else(|| RejectReason::NotANumber {
        field,
        value: raw.clone(),
    })?;

    if amount < 0.0 {
        return Err(RejectReason::Negative {
            field,
            value: amount,
        });
    }
    Ok(amount)
}

fn check_literal(
    field: OrderField,
    value: Option<&Value>,
    expected: &'static str,
) -> Result<String, RejectReason> {
    let actual = text(field, value)?;
    if actual != expected {
        return Err(RejectReason::UnexpectedValue {
            field,
            expected,
            value: actual.to_string(),
        });
    }
    Ok(actual.to_string())
}

fn check_date(value: Option<&Value>) -> Result<String, RejectReason> {
    let raw = text(OrderField::Date, value)?;
    let bad_date = || RejectReason::BadDate {
        value: raw.to_string(),
    };

    // chrono alone would also take single-digit months and days.
    if !date_shape().is_match(raw) {
        return Err(bad_date());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| bad_date())?;
    Ok(raw.to_string())
}
