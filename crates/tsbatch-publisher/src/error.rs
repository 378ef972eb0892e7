//! Publisher error types

use thiserror::Error;
use tsbatch_config::ConfigError;
use tsbatch_sink::SinkError;

/// Publisher errors
#[derive(Debug, Error)]
pub enum PublishError {
    /// The sink rejected a flushed batch. The batch has been dropped.
    #[error("failed to write {records} records ({measurements} measurements) to {database}.{table}")]
    WriteFailed {
        /// Target database
        database: String,
        /// Target table
        table: String,
        /// Measurements in the dropped batch
        measurements: usize,
        /// Records in the dropped batch
        records: usize,
        /// Error returned by the sink
        #[source]
        source: SinkError,
    },

    /// Publisher could not be built from config
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Sink could not be built
    #[error("sink error: {0}")]
    Sink(#[from] SinkError),
}

impl PublishError {
    /// Underlying sink error of a failed write
    pub fn sink_error(&self) -> Option<&SinkError> {
        match self {
            PublishError::WriteFailed { source, .. } => Some(source),
            PublishError::Sink(e) => Some(e),
            PublishError::Config(_) => None,
        }
    }
}

/// Result type for publisher construction
pub type PublishResult<T> = Result<T, PublishError>;
