//! # tsbatch-publisher
//!
//! Batching metrics publisher for time-series stores.
//!
//! Applications hand in [`Measurement`]s. The publisher queues them and,
//! once the batch size is reached or [`Publisher::flush`] is called,
//! converts them to wire records and writes them to a [`Sink`] in one call.
//!
//! ## Architecture
//!
//! ```text
//! send(measurement)
//!        |
//! +------------------+
//! |    BatchStore    |  <- pending measurements + last flush error
//! +------------------+
//!        | flush()
//! +------------------+
//! | to_records       |  <- one record per value, shared dimensions
//! | encode_value     |  <- numeric or text
//! +------------------+
//!        |
//! +------------------+
//! |       Sink       |  <- write_records(database, table, records)
//! +------------------+
//! ```
//!
//! Write failures never surface from `send` or `flush`. Check
//! [`Publisher::error`] after a flush; it only reflects the latest one.
//! Failed batches are dropped, not retried.
//!
//! ## Usage
//!
//! ```rust
//! use tsbatch_publisher::{BatchPublisher, Measurement, MockSink, Publisher};
//!
//! let sink = MockSink::new();
//! let mut publisher = BatchPublisher::new(sink.clone(), "metrics", "requests")
//!     .with_batch_size(2);
//!
//! publisher.send(
//!     Measurement::new("http")
//!         .with_tag("route", "/health")
//!         .with_value("latency_ms", 12.5)
//!         .with_value("ok", true),
//! );
//! assert_eq!(publisher.pending_len(), 1);
//!
//! publisher.flush();
//! assert_eq!(publisher.pending_len(), 0);
//! assert!(publisher.error().is_none());
//! assert_eq!(sink.records().len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod batch;
pub mod convert;
pub mod encode;
mod error;
mod publisher;

pub use batch::BatchStore;
pub use convert::{to_dimensions, to_records, unix_seconds};
pub use encode::encode_value;
pub use error::{PublishError, PublishResult};
pub use publisher::{BatchPublisher, Publisher};

// Re-export the types callers need alongside the publisher
pub use tsbatch_config::{Config, ConfigError};
pub use tsbatch_sink::{MockSink, Sink, SinkError, SinkResult};
pub use tsbatch_types::{
    Dimension, MeasureValueKind, Measurement, MeasurementTag, MeasurementValue, Record, TimeUnit,
    Value, WriteRecordsRequest,
};

#[cfg(feature = "http")]
pub use tsbatch_sink::HttpSink;
