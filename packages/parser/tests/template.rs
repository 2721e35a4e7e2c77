use viewcode_parser::{error::ParseError, sample, DataValue, Reference, RenderingCode, Template};

const SKELETON: &str = r#"{
    "version": 1,
    "code": {
        "sequence": [
            { "html_element": { "tag": "h1", "attrs": [], "inner_text": { "constant": "TODO list" } } },
            { "html_list": { "numbered": false, "inner_data": { "field": "tasks" }, "item_code": "hole" } }
        ]
    }
}"#;

#[test]
fn stored_skeleton_matches_sample() {
    let template = Template::from_json(SKELETON).unwrap();
    assert_eq!(template.code, sample::todo_skeleton());
    assert_eq!(template.code.hole_count(), 1);
    assert!(sample::todo_list().is_complete());
}

#[test]
fn list_source_is_an_explicit_field() {
    if let RenderingCode::Sequence(items) = sample::todo_list() {
        assert!(matches!(
            &items[1],
            RenderingCode::HtmlList { inner_data: Reference::Field(name), .. } if name == "tasks"
        ));
    } else {
        panic!("expected sequence root");
    }
}

#[test]
fn version_is_checked_before_shape() {
    let err = Template::from_json(r#"{ "version": 2, "code": { "html_grid": 3 } }"#).unwrap_err();
    assert!(matches!(err, ParseError::UnsupportedVersion { found: 2, .. }));
    assert!(err.to_string().contains("version `2`"));
}

#[test]
fn data_context_serializes_back_to_json() {
    let data = DataValue::from_json(r#"{ "tasks": [{ "task": "Buy milk", "completed": false }] }"#)
        .unwrap();
    let text = serde_json::to_string(&data).unwrap();
    assert_eq!(DataValue::from_json(&text).unwrap(), data);
}
