use chrono::NaiveDateTime;
use serde_json::Value;

/// Render format for date values in the output JSON.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single typed cell read from a dataset table.
///
/// The geodatabase runtime yields typed values per column; this enum carries
/// them through the join without committing to a JSON representation until
/// output time.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDateTime),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Convert to the JSON value emitted for pass-through fields.
    ///
    /// `Date` renders with [`DATETIME_FORMAT`]; a non-finite float has no
    /// JSON number representation and folds to null.
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Null => Value::Null,
            CellValue::Int(value) => Value::from(*value),
            CellValue::Float(value) => serde_json::Number::from_f64(*value)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CellValue::Text(value) => Value::String(value.clone()),
            CellValue::Date(value) => Value::String(value.format(DATETIME_FORMAT).to_string()),
        }
    }

    /// Canonical key text used to correlate rows across datasets.
    ///
    /// Null and blank values have no key; such rows never participate in a
    /// join.
    pub fn join_key(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Int(value) => Some(value.to_string()),
            CellValue::Float(value) => Some(value.to_string()),
            CellValue::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            CellValue::Date(value) => Some(value.format(DATETIME_FORMAT).to_string()),
        }
    }
}
