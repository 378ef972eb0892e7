//! Measurement model
//!
//! A [`Measurement`] is what an application hands to a publisher. It carries
//! a metric name, a list of tags that become dimensions, and one or more
//! named values that each end up as a separate wire record.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single metric observation
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Metric name, used as prefix of every measure name
    pub metric_name: String,
    /// Tags, converted to dimensions in this order
    #[serde(default)]
    pub tags: Vec<MeasurementTag>,
    /// Named values, one wire record each
    #[serde(default)]
    pub values: Vec<MeasurementValue>,
    /// Observation time. `None` (or the epoch) means "stamp on send".
    #[serde(default)]
    pub timestamp: Option<SystemTime>,
}

impl Measurement {
    /// Create a measurement without tags, values or timestamp
    pub fn new(metric_name: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            ..Default::default()
        }
    }

    /// Append a tag
    pub fn with_tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(MeasurementTag::new(name, value));
        self
    }

    /// Append a named value
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.push(MeasurementValue::new(name, value));
        self
    }

    /// Set the observation time
    pub fn at(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Whether a usable timestamp is present
    pub fn has_timestamp(&self) -> bool {
        matches!(self.timestamp, Some(ts) if ts != UNIX_EPOCH)
    }

    /// Assign `now` if no timestamp is present. Returns true if it was assigned.
    pub fn stamp_if_unset(&mut self, now: SystemTime) -> bool {
        if self.has_timestamp() {
            return false;
        }
        self.timestamp = Some(now);
        true
    }
}

/// Key/value pair attached to a measurement
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeasurementTag {
    /// Tag name
    pub name: String,
    /// Tag value
    pub value: String,
}

impl MeasurementTag {
    /// Create a new tag
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A single named value of a measurement
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementValue {
    /// Value name, appended to the metric name
    pub name: String,
    /// The observed value
    pub value: Value,
}

impl MeasurementValue {
    /// Create a new named value
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Observed value
///
/// Closed over the kinds the time-series store can receive. Integers and
/// floats are written as numbers; booleans and text are written as text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Signed integer of any width
    Int(i64),
    /// Unsigned integer of any width
    UInt(u64),
    /// Floating point number
    Float(f64),
    /// Boolean flag. Sent as text, the store has no boolean kind.
    Bool(bool),
    /// Free-form text
    Text(String),
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::Int(v as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::UInt(v as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_builder_preserves_order() {
        let m = Measurement::new("cpu")
            .with_tag("host", "a")
            .with_tag("host", "b")
            .with_value("user", 1)
            .with_value("idle", 0.5);

        assert_eq!(m.metric_name, "cpu");
        assert_eq!(m.tags[0], MeasurementTag::new("host", "a"));
        assert_eq!(m.tags[1], MeasurementTag::new("host", "b"));
        assert_eq!(m.values[0].name, "user");
        assert_eq!(m.values[1].value, Value::Float(0.5));
        assert!(m.timestamp.is_none());
    }

    #[test]
    fn test_value_from_integer_widths() {
        assert_eq!(Value::from(-3i8), Value::Int(-3));
        assert_eq!(Value::from(7i32), Value::Int(7));
        assert_eq!(Value::from(7u16), Value::UInt(7));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from("x"), Value::Text("x".to_string()));
    }

    #[test]
    fn test_stamp_if_unset() {
        let now = SystemTime::now();
        let mut m = Measurement::new("m");
        assert!(!m.has_timestamp());
        assert!(m.stamp_if_unset(now));
        assert_eq!(m.timestamp, Some(now));

        // Already stamped, left alone
        let later = now + Duration::from_secs(10);
        assert!(!m.stamp_if_unset(later));
        assert_eq!(m.timestamp, Some(now));
    }

    #[test]
    fn test_epoch_counts_as_unset() {
        let mut m = Measurement::new("m").at(UNIX_EPOCH);
        assert!(!m.has_timestamp());
        assert!(m.stamp_if_unset(SystemTime::now()));
        assert!(m.has_timestamp());
    }

    #[test]
    fn test_value_untagged_json() {
        let values: Vec<Value> = serde_json::from_str(r#"[1, -1, 0.25, true, "on"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Int(1),
                Value::Int(-1),
                Value::Float(0.25),
                Value::Bool(true),
                Value::Text("on".to_string()),
            ]
        );
    }
}
