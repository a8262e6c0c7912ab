use super::*;

fn parse_detail(json: &str) -> Option<ErrorDetail> {
    serde_json::from_str::<ErrorBody>(json)
        .expect("error body")
        .detail
}

#[test]
fn error_body_parses_string_detail() {
    let detail = parse_detail(r#"{"detail":"Incorrect username or password"}"#);
    assert_eq!(
        detail,
        Some(ErrorDetail::Message(
            "Incorrect username or password".to_owned()
        ))
    );
}

#[test]
fn error_body_parses_validation_detail() {
    let detail = parse_detail(
        r#"{"detail":[{"loc":["body","username"],"msg":"field required","type":"value_error.missing"}]}"#,
    );
    let Some(ErrorDetail::Validation(items)) = detail else {
        panic!("expected validation list");
    };
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].msg, "field required");
    assert_eq!(items[0].field_key(), "username");
}

#[test]
fn error_body_tolerates_missing_detail() {
    assert_eq!(parse_detail("{}"), None);
}

#[test]
fn field_key_joins_nested_segments_and_stringifies_indices() {
    let item: ValidationItem =
        serde_json::from_str(r#"{"loc":["body","items",0,"name"],"msg":"bad"}"#).expect("item");
    assert_eq!(item.field_key(), "items.0.name");
}

#[test]
fn field_key_is_empty_for_bare_location() {
    let item: ValidationItem = serde_json::from_str(r#"{"loc":["body"],"msg":"bad"}"#).expect("item");
    assert_eq!(item.field_key(), "");
}

#[test]
fn api_error_accessors_match_variant() {
    let err = ApiError::Api {
        status: 401,
        detail: Some(ErrorDetail::Message("Inactive user".to_owned())),
    };
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.detail_text(), Some("Inactive user"));
    assert!(err.validation_items().is_none());

    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.detail_text(), None);
}
