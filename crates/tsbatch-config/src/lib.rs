//! # tsbatch-config
//!
//! Configuration for tsbatch publishers.
//!
//! Settings are read from a TOML document laid out like this:
//!
//! ```toml
//! [aws]
//! region = "eu-central-1"
//!
//! [aws.timestream]
//! database = "metrics"
//! table = "measurements"
//! batch_size = 25
//! ```
//!
//! Only `database` and `table` are required. A missing or zero `batch_size`
//! makes the publisher flush after every send.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod error;

pub use config::{AwsConfig, Config, TimestreamConfig, DEFAULT_REGION};
pub use error::{ConfigError, ConfigResult};
