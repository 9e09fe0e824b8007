//! Record access boundary: field lookups and field updates against stored
//! records.

pub mod memory;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Map;
use thiserror::Error;

use crate::widget::FieldValue;

pub use memory::MemoryRecordStore;

/// Flat column-id to value mapping as returned by a lookup.
pub type FieldMap = Map<String, FieldValue>;

pub type RecordResult<T> = Result<T, RecordError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("{record_type} record `{id}` was not found")]
    NotFound { record_type: RecordType, id: String },
    #[error("invalid record id: {0}")]
    InvalidId(String),
    #[error("record store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    #[default]
    Customer,
    Contact,
    Employee,
    Vendor,
    SalesOrder,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Customer => "customer",
            RecordType::Contact => "contact",
            RecordType::Employee => "employee",
            RecordType::Vendor => "vendor",
            RecordType::SalesOrder => "salesorder",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    pub record_type: RecordType,
    pub id: String,
    pub columns: Vec<String>,
}

impl LookupRequest {
    pub fn new<I, S>(record_type: RecordType, id: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            record_type,
            id: id.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFieldsRequest {
    pub record_type: RecordType,
    pub id: String,
    pub values: FieldMap,
}

/// Reads selected columns of a stored record.
///
/// Multi-valued reference columns (such as `internalid`) come back as a
/// list of `{value, text}` pairs.
pub trait FieldLookup: Send + Sync {
    fn lookup_fields(&self, request: &LookupRequest) -> RecordResult<FieldMap>;
}

/// Writes field values onto a stored record, returning its id.
pub trait FieldUpdate: Send + Sync {
    fn submit_fields(&self, request: &SubmitFieldsRequest) -> RecordResult<String>;
}

/// Normalizes a request parameter into a record id.
///
/// Ids arrive either as numbers or as strings; blanks and other shapes are
/// rejected.
pub fn record_id(value: &FieldValue) -> RecordResult<String> {
    match value {
        FieldValue::String(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        FieldValue::Number(number) => Ok(number.to_string()),
        other => Err(RecordError::InvalidId(other.to_string())),
    }
}

/// First `value` of a reference column, rendered as text.
pub fn reference_value(lookup: &FieldMap, column: &str) -> Option<String> {
    let entry = match lookup.get(column)? {
        FieldValue::Array(entries) => entries.first()?,
        other => other,
    };
    let value = match entry {
        FieldValue::Object(pair) => pair.get("value")?,
        other => other,
    };
    match value {
        FieldValue::String(text) => Some(text.clone()),
        FieldValue::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
