//! HTTP sink

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tsbatch_types::WriteRecordsRequest;

use crate::{Sink, SinkError, SinkResult};

/// `X-Amz-Target` value of the write API
pub const WRITE_RECORDS_TARGET: &str = "Timestream_20181101.WriteRecords";

/// Request timeout used by [`HttpSink::new`]
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// Blocking HTTP sink
///
/// Posts each batch as one JSON write request. Request signing is left to
/// whatever sits in front of `endpoint` (a proxy or gateway).
pub struct HttpSink {
    client: Client,
    endpoint: String,
}

impl HttpSink {
    /// Create a sink for `endpoint` with the default timeout
    pub fn new(endpoint: &str) -> SinkResult<Self> {
        Self::with_timeout(endpoint, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Create a sink for `endpoint` with a per-request timeout
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> SinkResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    /// Target endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Sink for HttpSink {
    fn write_records(&self, request: &WriteRecordsRequest) -> SinkResult<()> {
        let body = serde_json::to_vec(request)?;

        tracing::debug!(
            endpoint = %self.endpoint,
            database = %request.database_name,
            table = %request.table_name,
            records = request.len(),
            "Writing records"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header("X-Amz-Target", WRITE_RECORDS_TARGET)
            .body(body)
            .send()
            .map_err(|e| SinkError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
