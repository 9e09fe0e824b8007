use insta::assert_snapshot;
use serde_json::json;
use serverwidget_core::{
    errors::WidgetError,
    server_widget::{create_form, CreateFormOptions},
    widget::{
        enums::{FieldDisplayType, FieldType},
        AddFieldGroupOptions, AddFieldOptions, AddSublistOptions, AddTabOptions,
        GetSublistValueOptions, Page, SetSublistValueOptions,
    },
};

fn form() -> serverwidget_core::widget::Form {
    create_form(CreateFormOptions::new("Hello World")).unwrap()
}

#[test]
fn added_fields_match_their_options() {
    let mut form = form();
    let cases = [
        ("custpage_a", "Alpha", "text", FieldType::Text),
        ("custpage_b", "Beta", "TextArea", FieldType::TextArea),
        ("custpage_c", "Gamma", " checkbox ", FieldType::Checkbox),
        ("custpage_d", "Delta", "MULTISELECT", FieldType::MultiSelect),
    ];
    for (id, label, raw_type, expected) in cases {
        let field = form
            .add_field(AddFieldOptions::new(id, label, raw_type))
            .unwrap();
        assert_eq!((field.id.as_str(), field.label.as_str()), (id, label));
        assert_eq!(field.field_type, expected);

        let stored = form.get_field(id).unwrap();
        assert_eq!(stored.label, label);
        assert_eq!(stored.field_type, expected);
    }
    assert!(form.get_field("custpage_zzz").is_none());
}

#[test]
fn invalid_type_leaves_the_form_unchanged() {
    let mut form = form();
    form.add_field(AddFieldOptions::new("custpage_a", "Alpha", "text"))
        .unwrap();

    let err = form
        .add_field(AddFieldOptions::new("custpage_b", "Beta", "txet"))
        .unwrap_err();
    assert!(matches!(
        err,
        WidgetError::InvalidEnumValue {
            kind: "FieldType",
            suggestion: Some("TEXT"),
            ..
        }
    ));
    assert_eq!(form.fields().len(), 1);
}

#[test]
fn required_keys_are_checked_in_order() {
    let mut form = form();
    let mut options = AddFieldOptions::default();
    options.field_type = Some("bogus".into());
    assert_eq!(
        form.add_field(options.clone()).unwrap_err(),
        WidgetError::MissingArgument {
            operation: "Form.addField",
            argument: "id"
        }
    );

    options.id = Some("custpage_a".into());
    let err = form.add_field(options.clone()).unwrap_err();
    assert_eq!(err.to_string(), "Form.addField: Missing a required argument: label");

    options.label = Some("Alpha".into());
    options.field_type = None;
    let err = form.add_field(options).unwrap_err();
    assert!(matches!(
        err,
        WidgetError::MissingArgument {
            argument: "type",
            ..
        }
    ));
    assert!(form.fields().is_empty());
}

#[test]
fn customizing_one_field_leaves_others_untouched() {
    let mut form = form();
    form.add_field(AddFieldOptions::new("custpage_a", "Alpha", "text"))
        .unwrap()
        .update_display_type(FieldDisplayType::Hidden)
        .set_default_value("a");
    form.add_field(AddFieldOptions::new("custpage_b", "Beta", "text"))
        .unwrap();

    let untouched = form.get_field("custpage_b").unwrap();
    assert_eq!(untouched.display_type, FieldDisplayType::Normal);
    assert_eq!(untouched.default_value, None);
}

#[test]
fn sublist_lines_grow_by_index() {
    let mut form = form();
    let sublist = form
        .add_sublist(AddSublistOptions::new("custpage_items", "Items", "list"))
        .unwrap();
    sublist
        .add_field(AddFieldOptions::new("a", "A", "text"))
        .unwrap();
    sublist
        .add_field(AddFieldOptions::new("b", "B", "text"))
        .unwrap();

    sublist
        .set_sublist_value(SetSublistValueOptions::new("a", 0, "x"))
        .unwrap();
    sublist
        .set_sublist_value(SetSublistValueOptions::new("b", 0, "y"))
        .unwrap();
    assert_eq!(sublist.line_count(), 1);
    assert_eq!(
        sublist
            .get_sublist_value(GetSublistValueOptions::new("a", 0))
            .unwrap(),
        Some(&json!("x"))
    );
    assert_eq!(
        sublist
            .get_sublist_value(GetSublistValueOptions::new("b", 0))
            .unwrap(),
        Some(&json!("y"))
    );

    sublist
        .set_sublist_value(SetSublistValueOptions::new("a", 1, "z"))
        .unwrap();
    assert_eq!(sublist.line_count(), 2);
    let err = sublist
        .set_sublist_value(SetSublistValueOptions::new("a", 3, "w"))
        .unwrap_err();
    assert!(matches!(
        err,
        WidgetError::IndexOutOfBounds {
            line: 3,
            line_count: 2,
            ..
        }
    ));
    assert_eq!(sublist.line_count(), 2);
}

#[test]
fn fields_added_later_extend_existing_lines() {
    let mut form = form();
    let sublist = form
        .add_sublist(AddSublistOptions::new("custpage_items", "Items", "inlineeditor"))
        .unwrap();
    sublist
        .add_field(AddFieldOptions::new("a", "A", "text"))
        .unwrap();
    sublist
        .add_field(AddFieldOptions::new("b", "B", "text"))
        .unwrap();
    sublist
        .set_sublist_value(SetSublistValueOptions::new("a", 0, "x"))
        .unwrap();
    sublist
        .set_sublist_value(SetSublistValueOptions::new("b", 0, "y"))
        .unwrap();

    sublist
        .add_field(AddFieldOptions::new("c", "C", "integer"))
        .unwrap();

    let line = &sublist.lines()[0];
    assert_eq!(line.slot_ids(), vec!["a", "b", "c"]);
    assert_eq!(line.value("a"), Some(&json!("x")));
    assert_eq!(line.value("b"), Some(&json!("y")));
    assert_eq!(line.value("c"), None);
}

#[test]
fn sublist_types_are_validated() {
    let mut form = form();
    let err = form
        .add_sublist(AddSublistOptions::new("custpage_items", "Items", "grid"))
        .unwrap_err();
    assert!(matches!(err, WidgetError::InvalidEnumValue { kind: "SublistType", .. }));
    assert!(form.sublists().is_empty());
}

#[test]
fn form_ids_are_unique_per_collection() {
    let mut form = form();
    form.add_tab(AddTabOptions::new("custpage_main", "Main"))
        .unwrap();
    form.add_field_group(AddFieldGroupOptions::new("custpage_grp", "Group").on_tab("custpage_main"))
        .unwrap();
    assert!(form
        .add_field_group(AddFieldGroupOptions::new("custpage_grp", "Again"))
        .is_err());
    assert!(form.add_tab(AddTabOptions::new("custpage_main", "Main")).is_err());

    form.add_field(AddFieldOptions::new("custpage_grp", "Same id, other kind", "text"))
        .unwrap();
    assert_eq!(form.field_groups().len(), 1);
    assert_eq!(form.fields().len(), 1);
}

#[test]
fn serialized_form_lists_fields_in_insertion_order() {
    let mut form = form();
    form.add_field(AddFieldOptions::new("custpage_comments", "Current Comments", "textarea"))
        .unwrap()
        .update_display_type(FieldDisplayType::Inline)
        .set_default_value("Foo Bar");
    form.add_submit_button(Some("Save")).unwrap();

    let page = Page::from(form);
    let value: serde_json::Value = serde_json::from_str(&page.to_json().unwrap()).unwrap();
    assert_eq!(value["kind"], "form");
    let field = &value["page"]["fields"][0];
    assert_snapshot!(
        format!(
            "{} {} {} {}",
            field["id"], field["type"], field["displayType"], field["defaultValue"]
        ),
        @r###""custpage_comments" "TEXTAREA" "INLINE" "Foo Bar""###
    );
    assert_eq!(value["page"]["buttons"][0]["id"], "submitter");
}
