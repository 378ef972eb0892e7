//! Wire records
//!
//! These mirror the write API of the time-series store. Field names are
//! serialized in the store's PascalCase JSON shape.

use serde::{Deserialize, Serialize};

/// Named dimension attached to a record
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimension {
    /// Dimension name
    pub name: String,
    /// Dimension value
    pub value: String,
}

impl Dimension {
    /// Create a new dimension
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Value kind of a record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasureValueKind {
    /// Numeric value, written as `DOUBLE`
    #[serde(rename = "DOUBLE")]
    Numeric,
    /// Text value, written as `VARCHAR`
    #[serde(rename = "VARCHAR")]
    Text,
}

impl MeasureValueKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureValueKind::Numeric => "DOUBLE",
            MeasureValueKind::Text => "VARCHAR",
        }
    }
}

/// Unit of [`Record::time`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeUnit {
    /// Seconds since the Unix epoch
    #[default]
    Seconds,
}

/// One measure as submitted to the store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    /// Dimensions, shared by all records of one measurement
    pub dimensions: Vec<Dimension>,
    /// `<metric name>.<value name>`
    pub measure_name: String,
    /// Encoded value
    pub measure_value: String,
    /// Kind of the encoded value
    #[serde(rename = "MeasureValueType")]
    pub measure_value_kind: MeasureValueKind,
    /// Integer time as a decimal string
    pub time: String,
    /// Unit of `time`
    pub time_unit: TimeUnit,
}

/// Batch write for a single database table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteRecordsRequest {
    /// Target database
    pub database_name: String,
    /// Target table
    pub table_name: String,
    /// Records in submission order
    pub records: Vec<Record>,
}

impl WriteRecordsRequest {
    /// Create a new request
    pub fn new(
        database_name: impl Into<String>,
        table_name: impl Into<String>,
        records: Vec<Record>,
    ) -> Self {
        Self {
            database_name: database_name.into(),
            table_name: table_name.into(),
            records,
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the request carries no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
