//! HTTP sink integration tests
//!
//! Runs the sink against a one-shot responder on a local socket.

#![cfg(feature = "http")]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tsbatch_sink::{HttpSink, Sink, SinkError, WRITE_RECORDS_TARGET};
use tsbatch_types::{Dimension, MeasureValueKind, Record, TimeUnit, WriteRecordsRequest};

/// Accept a single connection, answer with `status_line`, return the raw request
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        stream
            .set_read_timeout(Some(Duration::from_secs(5)))
            .unwrap();

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = stream.read(&mut chunk).unwrap();
            assert!(n > 0, "connection closed before headers");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = find(&buf, b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
        let content_length = head
            .lines()
            .find_map(|l| {
                let (name, value) = l.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().unwrap())
            })
            .unwrap_or(0);
        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "{}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        String::from_utf8_lossy(&buf).to_string()
    });

    (url, handle)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn request() -> WriteRecordsRequest {
    WriteRecordsRequest::new(
        "metrics",
        "measurements",
        vec![Record {
            dimensions: vec![Dimension::new("tag", "val")],
            measure_name: "test-metric.count".to_string(),
            measure_value: "1".to_string(),
            measure_value_kind: MeasureValueKind::Numeric,
            time: "1700000000".to_string(),
            time_unit: TimeUnit::Seconds,
        }],
    )
}

// ==================== Success Tests ====================

#[test]
fn test_http_sink_posts_write_request() {
    let (url, server) = serve_once("HTTP/1.1 200 OK", "{}");
    let sink = HttpSink::new(&url).unwrap();
    assert_eq!(sink.endpoint(), url);

    sink.write_records(&request()).unwrap();

    let raw = server.join().unwrap();
    assert!(raw.starts_with("POST / HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("x-amz-target: timestream_20181101.writerecords"));
    assert!(raw.contains("application/x-amz-json-1.0"));
    assert!(raw.contains(r#""DatabaseName":"metrics""#));
    assert!(raw.contains(r#""TableName":"measurements""#));
    assert!(raw.contains(r#""MeasureName":"test-metric.count""#));
    assert!(raw.contains(r#""MeasureValueType":"DOUBLE""#));
    assert!(raw.contains(r#""TimeUnit":"SECONDS""#));
    assert_eq!(WRITE_RECORDS_TARGET, "Timestream_20181101.WriteRecords");
}

// ==================== Failure Tests ====================

#[test]
fn test_http_sink_rejected_status() {
    let (url, server) = serve_once("HTTP/1.1 400 Bad Request", "ValidationException");
    let sink = HttpSink::new(&url).unwrap();

    let err = sink.write_records(&request()).unwrap_err();
    server.join().unwrap();

    assert_eq!(
        err,
        SinkError::Rejected {
            status: 400,
            body: "ValidationException".to_string(),
        }
    );
}

#[test]
fn test_http_sink_connection_refused() {
    // Bind then drop to get a port nobody listens on
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let sink = HttpSink::with_timeout(&format!("http://{}/", addr), Duration::from_secs(2)).unwrap();

    let err = sink.write_records(&request()).unwrap_err();
    assert!(matches!(err, SinkError::Transport(_)));
}
