//! Value encoding
//!
//! The store knows two value kinds. Integers and floats go out as numeric
//! (`DOUBLE`), everything else as text (`VARCHAR`).

use tsbatch_types::{MeasureValueKind, Value};

/// Encode a measurement value as wire string and kind
///
/// Floats use six fractional digits and never scientific notation,
/// so `0.53` becomes `"0.530000"`.
pub fn encode_value(value: &Value) -> (String, MeasureValueKind) {
    match value {
        Value::Int(v) => (v.to_string(), MeasureValueKind::Numeric),
        Value::UInt(v) => (v.to_string(), MeasureValueKind::Numeric),
        Value::Float(v) => (format!("{:.6}", v), MeasureValueKind::Numeric),
        // No boolean kind on the wire, keep sending "true"/"false" as text.
        Value::Bool(v) => (v.to_string(), MeasureValueKind::Text),
        Value::Text(v) => (v.clone(), MeasureValueKind::Text),
    }
}
