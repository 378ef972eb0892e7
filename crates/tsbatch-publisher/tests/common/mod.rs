//! Shared test fixtures

#![allow(dead_code)]

use std::sync::Once;
use tsbatch_publisher::Measurement;

static TRACING: Once = Once::new();

/// Route publisher logs to the test output at DEBUG level
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

/// Measurement with two tags and a numeric, a float and a boolean value
pub fn measurement_for_test() -> Measurement {
    Measurement::new("test-metric")
        .with_tag("tag", "val")
        .with_tag("tag2", "val2")
        .with_value("count", 1)
        .with_value("load", 0.53)
        .with_value("enabled", true)
}
