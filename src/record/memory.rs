use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};

use super::{
    FieldLookup, FieldMap, FieldUpdate, LookupRequest, RecordError, RecordResult, RecordType,
    SubmitFieldsRequest,
};
use crate::widget::FieldValue;

const INTERNAL_ID: &str = "internalid";
const LAST_MODIFIED: &str = "lastmodified";

/// Record store held entirely in memory, for offline runs and tests.
///
/// `internalid` is synthesized from the record key on every lookup and
/// every submit stamps `lastmodified` with the current UTC time.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<HashMap<(RecordType, String), FieldMap>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates or replaces a record.
    pub fn insert(
        &self,
        record_type: RecordType,
        id: impl Into<String>,
        values: FieldMap,
    ) -> RecordResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|err| RecordError::Unavailable(err.to_string()))?;
        records.insert((record_type, id.into()), values);
        Ok(())
    }

    /// Snapshot of a stored record's own fields.
    pub fn get(&self, record_type: RecordType, id: &str) -> RecordResult<Option<FieldMap>> {
        let records = self
            .records
            .read()
            .map_err(|err| RecordError::Unavailable(err.to_string()))?;
        Ok(records.get(&(record_type, id.to_string())).cloned())
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn internal_id(id: &str) -> FieldValue {
    let value = match id.parse::<u64>() {
        Ok(number) => json!(number),
        Err(_) => json!(id),
    };
    json!([{ "value": value, "text": id }])
}

impl FieldLookup for MemoryRecordStore {
    fn lookup_fields(&self, request: &LookupRequest) -> RecordResult<FieldMap> {
        let records = self
            .records
            .read()
            .map_err(|err| RecordError::Unavailable(err.to_string()))?;
        let record = records
            .get(&(request.record_type, request.id.clone()))
            .ok_or_else(|| RecordError::NotFound {
                record_type: request.record_type,
                id: request.id.clone(),
            })?;

        let mut result = FieldMap::new();
        for column in &request.columns {
            let value = if column == INTERNAL_ID {
                internal_id(&request.id)
            } else {
                record
                    .get(column)
                    .cloned()
                    .unwrap_or_else(|| FieldValue::String(String::new()))
            };
            result.insert(column.clone(), value);
        }
        debug!(
            record_type = %request.record_type,
            id = %request.id,
            columns = request.columns.len(),
            "looked up record fields"
        );
        Ok(result)
    }
}

impl FieldUpdate for MemoryRecordStore {
    fn submit_fields(&self, request: &SubmitFieldsRequest) -> RecordResult<String> {
        let mut records = self
            .records
            .write()
            .map_err(|err| RecordError::Unavailable(err.to_string()))?;
        let record = records
            .get_mut(&(request.record_type, request.id.clone()))
            .ok_or_else(|| RecordError::NotFound {
                record_type: request.record_type,
                id: request.id.clone(),
            })?;

        for (key, value) in &request.values {
            record.insert(key.clone(), value.clone());
        }
        record.insert(
            LAST_MODIFIED.to_string(),
            FieldValue::String(Utc::now().to_rfc3339()),
        );
        info!(
            record_type = %request.record_type,
            id = %request.id,
            fields = request.values.len(),
            "submitted record fields"
        );
        Ok(request.id.clone())
    }
}
