//! Sink trait and the in-memory mock

use parking_lot::Mutex;
use std::sync::Arc;
use tsbatch_types::{Record, WriteRecordsRequest};

use crate::{SinkError, SinkResult};

/// Writes record batches to a time-series store (object-safe)
///
/// Implementations own transport, authentication, retries and timeouts.
/// Callers only see success or a single [`SinkError`].
pub trait Sink: Send + Sync {
    /// Submit all records of `request` in one call
    fn write_records(&self, request: &WriteRecordsRequest) -> SinkResult<()>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write_records(&self, request: &WriteRecordsRequest) -> SinkResult<()> {
        (**self).write_records(request)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write_records(&self, request: &WriteRecordsRequest) -> SinkResult<()> {
        (**self).write_records(request)
    }
}

#[derive(Default)]
struct MockState {
    requests: Vec<WriteRecordsRequest>,
    calls: usize,
    failing: bool,
}

/// Mock sink for testing
///
/// Clones share state, so a test can keep a handle after moving the sink
/// into a publisher.
#[derive(Clone, Default)]
pub struct MockSink {
    state: Arc<Mutex<MockState>>,
}

impl MockSink {
    /// Create a mock sink that accepts every write
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock sink that rejects every write
    pub fn failing() -> Self {
        let sink = Self::new();
        sink.set_failing(true);
        sink
    }

    /// Switch between accepting and rejecting writes
    pub fn set_failing(&self, failing: bool) {
        self.state.lock().failing = failing;
    }

    /// Number of `write_records` calls, failed ones included
    pub fn calls(&self) -> usize {
        self.state.lock().calls
    }

    /// Accepted requests in arrival order
    pub fn requests(&self) -> Vec<WriteRecordsRequest> {
        self.state.lock().requests.clone()
    }

    /// All accepted records, flattened across requests
    pub fn records(&self) -> Vec<Record> {
        self.state
            .lock()
            .requests
            .iter()
            .flat_map(|r| r.records.iter().cloned())
            .collect()
    }

    /// Forget recorded requests and the call count
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.requests.clear();
        state.calls = 0;
    }
}

impl Sink for MockSink {
    fn write_records(&self, request: &WriteRecordsRequest) -> SinkResult<()> {
        let mut state = self.state.lock();
        state.calls += 1;
        if state.failing {
            return Err(SinkError::Unavailable("an error has occurred".to_string()));
        }
        state.requests.push(request.clone());
        Ok(())
    }
}
