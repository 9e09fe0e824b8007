mod common;

use common::RecordingStore;
use serde_json::json;
use serverwidget_core::{
    config::Config,
    handler::{FormHandler, HandlerError, Request},
    init,
    record::{FieldMap, LookupRequest, RecordError, RecordType},
    widget::{enums::FieldDisplayType, enums::FieldType, Page},
};

fn handler(store: RecordingStore) -> FormHandler<RecordingStore> {
    init();
    FormHandler::new(store, Config::default())
}

fn respond(handler: &FormHandler<RecordingStore>, request: &Request) -> Page {
    let mut pages: Vec<Page> = Vec::new();
    handler.on_request(request, &mut pages);
    assert_eq!(pages.len(), 1, "exactly one page is written");
    pages.remove(0)
}

#[test]
fn get_builds_read_form_from_lookup() {
    let handler = handler(RecordingStore::customer());
    let request = Request::get(FieldMap::new()).with_parameter("customerid", 6);

    let page = respond(&handler, &request);
    let form = page.as_form().expect("GET renders a form");

    assert_eq!(form.title, "Hello World");
    assert!(!form.hide_navbar);
    assert_eq!(
        form.get_field_ids(),
        vec!["custpage_comments", "custpage_customerid", "custpage_hello"]
    );

    let comments = form.get_field("custpage_comments").unwrap();
    assert_eq!(comments.field_type, FieldType::TextArea);
    assert_eq!(comments.display_type, FieldDisplayType::Inline);
    assert_eq!(comments.default_value, Some(json!("Foo Bar")));

    let customer = form.get_field("custpage_customerid").unwrap();
    assert_eq!(customer.display_type, FieldDisplayType::NoDisplay);
    assert_eq!(customer.default_value, Some(json!(6)));

    let hello = form.get_field("custpage_hello").unwrap();
    assert_eq!(hello.display_type, FieldDisplayType::Normal);
    assert_eq!(hello.default_value, Some(json!("Hello World")));

    assert_eq!(form.get_button("submitter").unwrap().label, "Save");

    assert_eq!(
        handler.store().lookup_calls(),
        vec![LookupRequest::new(
            RecordType::Customer,
            "6",
            ["comments", "internalid"]
        )]
    );
    assert!(handler.store().submit_calls().is_empty());
}

#[test]
fn post_saves_greeting_then_confirms() {
    let handler = handler(RecordingStore::customer());
    let request = Request::post(FieldMap::new())
        .with_parameter("custpage_customerid", "6")
        .with_parameter("custpage_hello", "Hello World");

    let form = handler.handle(&request).expect("POST succeeds");

    let submits = handler.store().submit_calls();
    assert_eq!(submits.len(), 1);
    assert_eq!(submits[0].record_type, RecordType::Customer);
    assert_eq!(submits[0].id, "6");
    assert_eq!(submits[0].values.get("comments"), Some(&json!("Hello World")));
    assert_eq!(handler.store().lookup_calls().len(), 1);

    assert_eq!(form.get_field_ids(), vec!["custpage_success"]);
    let success = form.get_field("custpage_success").unwrap();
    assert_eq!(success.display_type, FieldDisplayType::Inline);
    assert_eq!(
        success.default_value,
        Some(json!("Customer Id 6 was saved successfully."))
    );
}

#[test]
fn failed_lookup_renders_error_form() {
    let handler = handler(RecordingStore::failing_lookup(RecordError::Unavailable(
        "search is down".into(),
    )));
    let request = Request::get(FieldMap::new()).with_parameter("customerid", 6);

    let page = respond(&handler, &request);
    let form = page.as_form().unwrap();
    assert_eq!(form.get_field_ids(), vec!["custpage_error"]);
    assert_eq!(
        form.get_field("custpage_error").unwrap().default_value,
        Some(json!("record store unavailable: search is down"))
    );
}

#[test]
fn failed_submit_skips_lookup() {
    let handler = handler(RecordingStore::failing_submit(RecordError::NotFound {
        record_type: RecordType::Customer,
        id: "6".into(),
    }));
    let request = Request::post(FieldMap::new()).with_parameter("custpage_customerid", 6);

    let err = handler.handle(&request).unwrap_err();
    assert!(matches!(err, HandlerError::Record(RecordError::NotFound { .. })));
    assert!(handler.store().lookup_calls().is_empty());
}

#[test]
fn missing_customer_id_is_reported() {
    let handler = handler(RecordingStore::customer());
    let err = handler.handle(&Request::get(FieldMap::new())).unwrap_err();
    assert!(matches!(err, HandlerError::MissingParameter("customerid")));

    let page = respond(&handler, &Request::post(FieldMap::new()));
    let message = page.as_form().unwrap().get_field("custpage_error").unwrap();
    assert_eq!(
        message.default_value,
        Some(json!("missing request parameter `custpage_customerid`"))
    );
}

#[test]
fn configured_texts_flow_into_the_form() {
    init();
    let config = Config {
        form_title: "Greetings".into(),
        greeting: "Hi".into(),
        success_template: "Saved {id}.".into(),
        ..Config::default()
    };
    let handler = FormHandler::new(RecordingStore::customer(), config);

    let get = handler
        .handle(&Request::get(FieldMap::new()).with_parameter("customerid", "6"))
        .unwrap();
    assert_eq!(get.title, "Greetings");
    assert_eq!(
        get.get_field("custpage_hello").unwrap().default_value,
        Some(json!("Hi"))
    );

    let post = handler
        .handle(&Request::post(FieldMap::new()).with_parameter("custpage_customerid", "6"))
        .unwrap();
    assert_eq!(
        post.get_field("custpage_success").unwrap().default_value,
        Some(json!("Saved 6."))
    );
}
