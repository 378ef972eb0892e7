//! # tsbatch-types
//!
//! Data types shared by the tsbatch crates.
//!
//! This crate provides:
//! - [`Measurement`](measurement::Measurement) - One metric observation as handed in by an application
//! - [`Record`](record::Record) - One wire record as submitted to the time-series store
//! - [`WriteRecordsRequest`](record::WriteRecordsRequest) - A batch of records for one database table

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod measurement;
pub mod record;

// Re-export commonly used types
pub use measurement::{Measurement, MeasurementTag, MeasurementValue, Value};
pub use record::{Dimension, MeasureValueKind, Record, TimeUnit, WriteRecordsRequest};
