//! Measurement to wire record conversion

use std::time::{SystemTime, UNIX_EPOCH};
use tsbatch_types::{Dimension, Measurement, MeasurementTag, Record, TimeUnit};

use crate::encode::encode_value;

/// Convert tags to dimensions, one-to-one and in order
pub fn to_dimensions(tags: &[MeasurementTag]) -> Vec<Dimension> {
    tags.iter()
        .map(|tag| Dimension::new(&tag.name, &tag.value))
        .collect()
}

/// Convert one measurement to one record per value
///
/// All records share the measurement's dimensions and time. A measurement
/// without values yields no records. A missing timestamp is written as the
/// epoch; the publisher stamps measurements on send, so this only happens
/// when calling the converter directly.
pub fn to_records(measurement: &Measurement) -> Vec<Record> {
    let dimensions = to_dimensions(&measurement.tags);
    let time = unix_seconds(measurement.timestamp.unwrap_or(UNIX_EPOCH)).to_string();

    measurement
        .values
        .iter()
        .map(|value| {
            let (measure_value, measure_value_kind) = encode_value(&value.value);
            Record {
                dimensions: dimensions.clone(),
                measure_name: format!("{}.{}", measurement.metric_name, value.name),
                measure_value,
                measure_value_kind,
                time: time.clone(),
                time_unit: TimeUnit::Seconds,
            }
        })
        .collect()
}

/// Whole seconds since the Unix epoch, rounded towards negative infinity
pub fn unix_seconds(timestamp: SystemTime) -> i64 {
    match timestamp.duration_since(UNIX_EPOCH) {
        Ok(since) => since.as_secs() as i64,
        Err(e) => {
            let before = e.duration();
            let secs = before.as_secs() as i64;
            if before.subsec_nanos() > 0 {
                -secs - 1
            } else {
                -secs
            }
        }
    }
}
