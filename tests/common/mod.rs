#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde_json::json;
use serverwidget_core::{
    config::ConfigManager,
    record::{
        FieldLookup, FieldMap, FieldUpdate, LookupRequest, RecordError, RecordResult,
        SubmitFieldsRequest,
    },
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Lookup result for customer 6.
pub static CUSTOMER_LOOKUP: Lazy<FieldMap> = Lazy::new(|| {
    let value = json!({
        "comments": "Foo Bar",
        "internalid": [{"value": 6, "text": "6"}]
    });
    value.as_object().cloned().expect("lookup fixture is an object")
});

/// Creates a config manager rooted in a fresh temporary directory.
pub fn temp_config_manager() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

/// Record store double that answers with canned data and records every call.
pub struct RecordingStore {
    lookup_response: RecordResult<FieldMap>,
    submit_response: RecordResult<String>,
    pub lookups: Mutex<Vec<LookupRequest>>,
    pub submits: Mutex<Vec<SubmitFieldsRequest>>,
}

impl RecordingStore {
    pub fn new(lookup: FieldMap) -> Self {
        Self {
            lookup_response: Ok(lookup),
            submit_response: Ok("6".into()),
            lookups: Mutex::new(Vec::new()),
            submits: Mutex::new(Vec::new()),
        }
    }

    pub fn customer() -> Self {
        Self::new(CUSTOMER_LOOKUP.clone())
    }

    pub fn failing_lookup(err: RecordError) -> Self {
        Self {
            lookup_response: Err(err),
            ..Self::customer()
        }
    }

    pub fn failing_submit(err: RecordError) -> Self {
        Self {
            submit_response: Err(err),
            ..Self::customer()
        }
    }

    pub fn lookup_calls(&self) -> Vec<LookupRequest> {
        self.lookups.lock().expect("lock lookups").clone()
    }

    pub fn submit_calls(&self) -> Vec<SubmitFieldsRequest> {
        self.submits.lock().expect("lock submits").clone()
    }
}

impl FieldLookup for RecordingStore {
    fn lookup_fields(&self, request: &LookupRequest) -> RecordResult<FieldMap> {
        self.lookups
            .lock()
            .expect("lock lookups")
            .push(request.clone());
        self.lookup_response.clone()
    }
}

impl FieldUpdate for RecordingStore {
    fn submit_fields(&self, request: &SubmitFieldsRequest) -> RecordResult<String> {
        self.submits
            .lock()
            .expect("lock submits")
            .push(request.clone());
        self.submit_response.clone()
    }
}
