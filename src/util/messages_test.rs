use super::*;
use crate::net::error::ErrorDetail;

fn item(loc: serde_json::Value, msg: &str) -> ValidationItem {
    serde_json::from_value(serde_json::json!({ "loc": loc, "msg": msg })).expect("item")
}

// =============================================================
// Literal auth map
// =============================================================

#[test]
fn auth_detail_maps_known_literals() {
    assert_eq!(
        translate_auth_detail("Incorrect username or password"),
        "用户名或密码错误"
    );
    assert_eq!(translate_auth_detail("Inactive user"), "账号已停用");
    assert_eq!(
        translate_auth_detail("The user with this username already exists in the system"),
        "用户名已被注册"
    );
}

#[test]
fn auth_detail_passes_chinese_through() {
    assert_eq!(translate_auth_detail("用户名已存在"), "用户名已存在");
}

#[test]
fn auth_detail_unmapped_english_is_empty() {
    assert_eq!(translate_auth_detail("Something exploded"), "");
    assert_eq!(translate_auth_detail(""), "");
}

// =============================================================
// Validation list formatting
// =============================================================

#[test]
fn validation_required_field_is_labeled() {
    let items = vec![item(
        serde_json::json!(["body", "username"]),
        "field required",
    )];
    assert_eq!(format_validation_error(&items), "用户名：不能为空");
}

#[test]
fn validation_items_join_with_fullwidth_semicolon() {
    let items = vec![
        item(serde_json::json!(["body", "username"]), "field required"),
        item(
            serde_json::json!(["body", "password"]),
            "ensure this value has at least 6 characters",
        ),
    ];
    assert_eq!(
        format_validation_error(&items),
        "用户名：不能为空；密码：至少 6 位字符"
    );
}

#[test]
fn validation_length_bounds_extract_the_number() {
    let items = vec![item(
        serde_json::json!(["body", "password"]),
        "ensure this value has at most 128 characters",
    )];
    assert_eq!(format_validation_error(&items), "密码：不能超过 128 位字符");
}

#[test]
fn validation_email_heuristic() {
    let items = vec![item(
        serde_json::json!(["body", "email"]),
        "value is not a valid email address",
    )];
    assert_eq!(format_validation_error(&items), "邮箱：邮箱格式不正确");
}

#[test]
fn validation_unknown_field_keeps_raw_key() {
    let items = vec![item(serde_json::json!(["body", "nickname"]), "missing")];
    assert_eq!(format_validation_error(&items), "nickname：不能为空");
}

#[test]
fn validation_bare_location_uses_generic_label() {
    let items = vec![item(serde_json::json!(["body"]), "whatever")];
    assert_eq!(format_validation_error(&items), "字段：输入不合法");
}

#[test]
fn validation_empty_list_is_empty_string() {
    assert_eq!(format_validation_error(&[]), "");
}

// =============================================================
// Task detail heuristics
// =============================================================

#[test]
fn task_detail_maps_literals() {
    assert_eq!(
        translate_task_detail("Task deadline has passed"),
        "已超过截止时间，无法提交"
    );
}

#[test]
fn task_detail_keyword_heuristic_fires_on_pairs() {
    assert_eq!(
        translate_task_detail("the deadline for this item has expired"),
        "已超过截止时间，无法提交"
    );
    assert_eq!(
        translate_task_detail("submission window closed"),
        "已超过截止时间，无法提交"
    );
}

#[test]
fn task_detail_single_keyword_does_not_fire() {
    assert_eq!(translate_task_detail("deadline approaching"), "");
    assert_eq!(translate_task_detail("closed for maintenance"), "");
}

// =============================================================
// ApiError -> display message
// =============================================================

#[test]
fn auth_error_message_prefers_validation_list() {
    let err = ApiError::Api {
        status: 422,
        detail: Some(ErrorDetail::Validation(vec![item(
            serde_json::json!(["body", "username"]),
            "field required",
        )])),
    };
    assert_eq!(auth_error_message(&err, "注册失败"), "用户名：不能为空");
}

#[test]
fn auth_error_message_translates_string_detail() {
    let err = ApiError::Api {
        status: 400,
        detail: Some(ErrorDetail::Message(
            "Incorrect username or password".to_owned(),
        )),
    };
    assert_eq!(auth_error_message(&err, "登录失败"), "用户名或密码错误");
}

#[test]
fn auth_error_message_falls_back_on_network_error() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(auth_error_message(&err, "登录失败，请检查账号或密码"), "登录失败，请检查账号或密码");
}

#[test]
fn task_error_message_falls_back_when_unmapped() {
    let err = ApiError::Api {
        status: 400,
        detail: Some(ErrorDetail::Message("Nope".to_owned())),
    };
    assert_eq!(task_error_message(&err, "提交失败"), "提交失败");
}
