use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

pub const MIN_YEAR: i64 = 1900;

/// Upper bound for every year field.
pub fn current_year() -> i32 {
    Utc::now().year()
}

// ───── Input ────────────────────────────────────────────────────────

/// Raw date fields as they arrive from the caller. Values are kept as
/// untyped JSON so a mistyped field fails at its own validation step
/// instead of in the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRangeInput {
    pub start_date_month: Option<Value>,
    pub start_date_year: Option<Value>,
    pub end_date_month: Option<Value>,
    pub end_date_year: Option<Value>,
    pub is_current: Option<Value>,
}

// ───── Validated ────────────────────────────────────────────────────

/// A date range that passed validation. When `is_current == 1` both end
/// fields are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start_date_month: i16,
    pub start_date_year: i16,
    pub end_date_month: Option<i16>,
    pub end_date_year: Option<i16>,
    pub is_current: i16,
}

impl DateRangeInput {
    /// Whether the date fields every record needs are present. A zero
    /// month or year counts as missing, a zero `is_current` does not.
    pub fn has_required_fields(&self) -> bool {
        is_filled(self.start_date_month.as_ref())
            && is_filled(self.start_date_year.as_ref())
            && self.is_current.as_ref().is_some_and(|v| !v.is_null())
    }

    /// Runs the date checks in order and stops at the first failure:
    /// current flag, start month, start year, then the end date when the
    /// record is not current.
    pub fn validate(&self, current_year: i32) -> Result<DateRange, AppError> {
        let is_current = match self.is_current.as_ref().and_then(as_integer) {
            Some(flag @ (0 | 1)) => flag as i16,
            _ => return Err(AppError::invalid_param("is_current must be 0 or 1")),
        };

        let start_date_month = check_month(self.start_date_month.as_ref(), "start_date_month")?;
        let start_date_year =
            check_year(self.start_date_year.as_ref(), "start_date_year", current_year)?;

        if is_current == 1 {
            return Ok(DateRange {
                start_date_month,
                start_date_year,
                end_date_month: None,
                end_date_year: None,
                is_current,
            });
        }

        if !is_filled(self.end_date_month.as_ref()) || !is_filled(self.end_date_year.as_ref()) {
            return Err(AppError::invalid_param(
                "end_date_month and end_date_year are required if is_current is false",
            ));
        }

        let end_date_month = check_month(self.end_date_month.as_ref(), "end_date_month")?;
        let end_date_year = check_year(self.end_date_year.as_ref(), "end_date_year", current_year)?;

        // Both sides sit on day 1 of their month, so a tuple compare is enough
        if (start_date_year, start_date_month) > (end_date_year, end_date_month) {
            return Err(AppError::invalid_param("start_date must before end_date"));
        }

        Ok(DateRange {
            start_date_month,
            start_date_year,
            end_date_month: Some(end_date_month),
            end_date_year: Some(end_date_year),
            is_current,
        })
    }
}

/// Required-field presence: null, `false`, `0` and `""` are missing.
fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Whole JSON numbers only. `3.0` is accepted, `3.5`, `"3"` and `true` are not.
fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// A trimmed, non-empty string field.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn check_month(value: Option<&Value>, field: &str) -> Result<i16, AppError> {
    match value.and_then(as_integer) {
        Some(month @ 1..=12) => Ok(month as i16),
        _ => Err(AppError::invalid_param(format!(
            "{field} must between 1 - 12 (inclusive)"
        ))),
    }
}

fn check_year(value: Option<&Value>, field: &str, current_year: i32) -> Result<i16, AppError> {
    match value.and_then(as_integer) {
        Some(year) if (MIN_YEAR..=i64::from(current_year)).contains(&year) => Ok(year as i16),
        _ => Err(AppError::invalid_param(format!(
            "{field} must between {MIN_YEAR} - {current_year} (inclusive)"
        ))),
    }
}
