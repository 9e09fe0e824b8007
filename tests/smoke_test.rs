use serde_json::json;
use serverwidget_core::{
    config::Config,
    handler::{FormHandler, Request},
    init,
    record::{FieldMap, MemoryRecordStore, RecordType},
};

#[test]
fn comment_round_trip_smoke() {
    init();

    let store = MemoryRecordStore::new();
    let mut customer = FieldMap::new();
    customer.insert("comments".into(), json!("Foo Bar"));
    store.insert(RecordType::Customer, "6", customer).unwrap();
    let handler = FormHandler::new(store, Config::default());

    let post = handler
        .handle(
            &Request::post(FieldMap::new())
                .with_parameter("custpage_customerid", 6)
                .with_parameter("custpage_hello", "Hello World"),
        )
        .unwrap();
    assert_eq!(
        post.get_field("custpage_success").unwrap().default_value,
        Some(json!("Customer Id 6 was saved successfully."))
    );

    let get = handler
        .handle(&Request::get(FieldMap::new()).with_parameter("customerid", 6))
        .unwrap();
    assert_eq!(
        get.get_field("custpage_comments").unwrap().default_value,
        Some(json!("Hello World"))
    );

    let stored = handler
        .store()
        .get(RecordType::Customer, "6")
        .unwrap()
        .unwrap();
    assert!(stored.contains_key("lastmodified"));
}
