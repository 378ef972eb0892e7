//! # tsbatch-sink
//!
//! Clients that submit batches of wire records to a time-series store.
//!
//! ## Features
//!
//! - **Sink**: the capability a publisher needs, "write these records, tell me if it worked"
//! - **HttpSink**: posts the store's JSON write request over HTTP (feature `http`)
//! - **MockSink**: in-memory sink for tests, can be told to fail
//!
//! ## Usage
//!
//! ```rust
//! use tsbatch_sink::{MockSink, Sink};
//! use tsbatch_types::WriteRecordsRequest;
//!
//! let sink = MockSink::new();
//! sink.write_records(&WriteRecordsRequest::new("db", "table", vec![])).unwrap();
//! assert_eq!(sink.calls(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod sink;

#[cfg(feature = "http")]
mod http;

pub use error::{SinkError, SinkResult};
pub use sink::{MockSink, Sink};

#[cfg(feature = "http")]
pub use http::{HttpSink, DEFAULT_REQUEST_TIMEOUT, WRITE_RECORDS_TARGET};
