//! Pending measurements and last flush outcome

use tsbatch_types::Measurement;

use crate::PublishError;

/// Queue of measurements waiting for the next flush
///
/// Append-only between flushes. [`drain_and_reset`](Self::drain_and_reset)
/// hands out the whole queue and leaves it empty, whatever happens to the
/// drained batch afterwards.
#[derive(Debug, Default)]
pub struct BatchStore {
    pending: Vec<Measurement>,
    last_error: Option<PublishError>,
}

impl BatchStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a measurement
    pub fn push(&mut self, measurement: Measurement) {
        self.pending.push(measurement);
    }

    /// Number of pending measurements
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending measurements in arrival order
    pub fn pending(&self) -> &[Measurement] {
        &self.pending
    }

    /// Take all pending measurements, leaving the queue empty
    pub fn drain_and_reset(&mut self) -> Vec<Measurement> {
        std::mem::take(&mut self.pending)
    }

    /// Error of the last flush, if it failed
    pub fn error(&self) -> Option<&PublishError> {
        self.last_error.as_ref()
    }

    /// Forget the previous flush outcome
    pub fn reset_error(&mut self) {
        self.last_error = None;
    }

    /// Record the outcome of a failed flush
    pub fn set_error(&mut self, error: PublishError) {
        self.last_error = Some(error);
    }
}
