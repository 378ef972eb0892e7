//! Batching publisher

use std::time::SystemTime;
use tracing::Level;
use tsbatch_config::Config;
use tsbatch_sink::Sink;
use tsbatch_types::{Measurement, Record, WriteRecordsRequest};

use crate::batch::BatchStore;
use crate::convert::to_records;
use crate::{PublishError, PublishResult};

#[cfg(feature = "http")]
use tsbatch_sink::HttpSink;

/// Publishes measurements to a time-series store
pub trait Publisher {
    /// Queue a measurement. May flush if the batch size is reached.
    fn send(&mut self, measurement: Measurement);

    /// Write all queued measurements now
    fn flush(&mut self);

    /// Error of the latest flush, `None` if it succeeded or none ran yet
    fn error(&self) -> Option<&PublishError>;
}

/// Publisher that writes batches through a [`Sink`]
///
/// Not internally synchronized: `send` and `flush` take `&mut self` and run
/// on the caller's thread, blocking on the sink. Share one instance across
/// threads only behind a lock, or give each worker its own publisher.
pub struct BatchPublisher {
    sink: Box<dyn Sink>,
    database: String,
    table: String,
    /// `None` or `Some(0)` flushes on every send
    batch_size: Option<usize>,
    store: BatchStore,
}

impl BatchPublisher {
    /// Create a publisher writing to `database`.`table` through `sink`
    ///
    /// Without a batch size every send flushes immediately.
    pub fn new(
        sink: impl Sink + 'static,
        database: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            sink: Box::new(sink),
            database: database.into(),
            table: table.into(),
            batch_size: None,
            store: BatchStore::new(),
        }
    }

    /// Create a publisher with target and batch size taken from `config`
    pub fn with_config(sink: impl Sink + 'static, config: &Config) -> PublishResult<Self> {
        let mut publisher = Self::new(sink, config.database()?, config.table()?);
        publisher.set_batch_size(config.batch_size());
        Ok(publisher)
    }

    /// Create a publisher with an HTTP sink built from `config`
    #[cfg(feature = "http")]
    pub fn from_config(config: &Config) -> PublishResult<Self> {
        config.validate()?;
        let endpoint = config.endpoint()?;
        let sink = HttpSink::with_timeout(&endpoint, config.request_timeout())?;

        tracing::info!(
            endpoint = %endpoint,
            batch_size = ?config.batch_size(),
            "Created publisher for {}.{}",
            config.aws.timestream.database.as_deref().unwrap_or_default(),
            config.aws.timestream.table.as_deref().unwrap_or_default()
        );

        Self::with_config(sink, config)
    }

    /// Set the batch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    /// Replace the batch size. `None` or `Some(0)` flushes on every send.
    pub fn set_batch_size(&mut self, batch_size: Option<usize>) {
        self.batch_size = batch_size;
    }

    /// Configured batch size
    pub fn batch_size(&self) -> Option<usize> {
        self.batch_size
    }

    /// Target database
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Target table
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Number of queued measurements
    pub fn pending_len(&self) -> usize {
        self.store.len()
    }

    /// Queued measurements in arrival order
    pub fn pending(&self) -> &[Measurement] {
        self.store.pending()
    }

    fn batch_size_reached(&self) -> bool {
        match self.batch_size {
            None | Some(0) => true,
            Some(size) => self.store.len() >= size,
        }
    }

    fn log_records(records: &[Record]) {
        if !tracing::enabled!(Level::DEBUG) {
            return;
        }
        match serde_json::to_string(records) {
            Ok(json) => tracing::debug!("Publish records: {}", json),
            Err(e) => tracing::debug!("Unable to serialize records for logging: {}", e),
        }
    }
}

impl Publisher for BatchPublisher {
    fn send(&mut self, mut measurement: Measurement) {
        tracing::debug!(
            metric = %measurement.metric_name,
            values = measurement.values.len(),
            "Receive measurement"
        );

        measurement.stamp_if_unset(SystemTime::now());
        self.store.push(measurement);

        if self.batch_size_reached() {
            tracing::debug!("Batch size reached, publishing measurements");
            self.flush();
        }
    }

    fn flush(&mut self) {
        if self.store.is_empty() {
            return;
        }

        self.store.reset_error();
        let measurements = self.store.drain_and_reset();
        let records: Vec<Record> = measurements.iter().flat_map(to_records).collect();

        tracing::info!(
            "Publish {} measurements as {} records",
            measurements.len(),
            records.len()
        );
        Self::log_records(&records);

        let request = WriteRecordsRequest::new(&self.database, &self.table, records);
        if let Err(source) = self.sink.write_records(&request) {
            tracing::error!("Write error: {}", source);
            self.store.set_error(PublishError::WriteFailed {
                database: self.database.clone(),
                table: self.table.clone(),
                measurements: measurements.len(),
                records: request.len(),
                source,
            });
        }
    }

    fn error(&self) -> Option<&PublishError> {
        self.store.error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsbatch_sink::MockSink;

    #[test]
    fn test_batch_size_policy() {
        let mut publisher = BatchPublisher::new(MockSink::new(), "db", "tbl");
        assert!(publisher.batch_size_reached());

        publisher.set_batch_size(Some(0));
        assert!(publisher.batch_size_reached());

        publisher.set_batch_size(Some(2));
        assert!(!publisher.batch_size_reached());
        publisher.store.push(Measurement::new("a"));
        assert!(!publisher.batch_size_reached());
        publisher.store.push(Measurement::new("b"));
        assert!(publisher.batch_size_reached());
    }

    #[test]
    fn test_with_config() {
        let config = Config::new("db", "tbl").with_batch_size(5);
        let publisher = BatchPublisher::with_config(MockSink::new(), &config).unwrap();
        assert_eq!(publisher.database(), "db");
        assert_eq!(publisher.table(), "tbl");
        assert_eq!(publisher.batch_size(), Some(5));
    }

    #[test]
    fn test_with_config_missing_database() {
        let config = Config::default();
        let result = BatchPublisher::with_config(MockSink::new(), &config);
        assert!(matches!(result, Err(PublishError::Config(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_from_config_builds_http_sink() {
        let config = Config::new("db", "tbl").with_endpoint("http://127.0.0.1:9/");
        let publisher = BatchPublisher::from_config(&config).unwrap();
        assert_eq!(publisher.batch_size(), None);
        assert_eq!(publisher.pending_len(), 0);

        let invalid = Config::new("db", "tbl").with_endpoint("not-a-url");
        assert!(matches!(
            BatchPublisher::from_config(&invalid),
            Err(PublishError::Config(_))
        ));
    }
}
