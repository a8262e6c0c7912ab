//! Backend error message translation.
//!
//! Pure functions mapping backend error payloads to Chinese display
//! strings. Three layers, tried in order: pass-through when the text is
//! already Chinese, an exact literal map for the backend's known English
//! messages, and keyword heuristics for validation phrasing. An unmapped
//! message yields `""` so callers can substitute their own generic copy.
//!
//! No state, no side effects; safe to call redundantly.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::error::{ApiError, ValidationItem};

/// True when the text contains at least one CJK unified ideograph.
pub fn has_chinese(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c))
}

fn auth_literal(detail: &str) -> Option<&'static str> {
    Some(match detail {
        "Incorrect username or password" => "用户名或密码错误",
        "Inactive user" => "账号已停用",
        "The user with this username already exists in the system" => "用户名已被注册",
        "The user with this email already exists in the system" => "该邮箱已被注册",
        "Email not found" => "邮箱未找到",
        "Invalid or expired code" => "验证码无效或已过期",
        "Failed to send verification email. Please try again later." => {
            "验证码发送失败，请稍后再试"
        }
        _ => return None,
    })
}

/// Translate a plain-string auth/user error detail.
///
/// Chinese input passes through unchanged; unknown English input yields
/// an empty string.
pub fn translate_auth_detail(detail: &str) -> String {
    if detail.is_empty() {
        return String::new();
    }
    if has_chinese(detail) {
        return detail.to_owned();
    }
    auth_literal(detail).map_or_else(String::new, str::to_owned)
}

const DEADLINE_PASSED: &str = "已超过截止时间，无法提交";

fn task_literal(detail: &str) -> Option<&'static str> {
    match detail {
        "Task deadline has passed"
        | "Submission deadline has passed"
        | "Deadline has passed"
        | "The deadline has passed"
        | "Submission is closed"
        | "Task is closed" => Some(DEADLINE_PASSED),
        _ => None,
    }
}

/// Translate a task submission error detail, with keyword heuristics for
/// deadline phrasing the literal map does not cover.
pub fn translate_task_detail(detail: &str) -> String {
    if detail.is_empty() {
        return String::new();
    }
    if has_chinese(detail) {
        return detail.to_owned();
    }
    let trimmed = detail.trim();
    if let Some(mapped) = task_literal(trimmed) {
        return mapped.to_owned();
    }
    let lower = trimmed.to_lowercase();
    let expired = ["expired", "overdue", "passed", "late", "closed"]
        .iter()
        .any(|kw| lower.contains(kw));
    if expired && (lower.contains("deadline") || lower.contains("submission")) {
        return DEADLINE_PASSED.to_owned();
    }
    String::new()
}

fn field_label(key: &str) -> &str {
    match key {
        "username" => "用户名",
        "password" => "密码",
        "email" => "邮箱",
        "full_name" => "姓名",
        "role_id" => "角色",
        other => other,
    }
}

/// Extract the numeric bound from phrasing like "at least 6 characters".
fn length_bound<'a>(lower: &'a str, needle: &str) -> Option<&'a str> {
    let start = lower.find(needle)? + needle.len();
    let rest = &lower[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 { None } else { Some(&rest[..end]) }
}

fn translate_validation_message(msg: &str) -> String {
    if msg.is_empty() {
        return "输入不合法".to_owned();
    }
    if has_chinese(msg) {
        return msg.to_owned();
    }
    let lower = msg.to_lowercase();
    if lower.contains("field required") || lower.contains("missing") {
        return "不能为空".to_owned();
    }
    if lower.contains("valid email") {
        return "邮箱格式不正确".to_owned();
    }
    if let Some(min) = length_bound(&lower, "at least ") {
        return format!("至少 {min} 位字符");
    }
    if let Some(max) = length_bound(&lower, "at most ") {
        return format!("不能超过 {max} 位字符");
    }
    "输入不合法".to_owned()
}

/// Aggregate a structured validation error list into one field-labeled
/// message, items joined with `；`.
pub fn format_validation_error(items: &[ValidationItem]) -> String {
    items
        .iter()
        .map(|item| {
            let key = item.field_key();
            let label = if key.is_empty() {
                "字段".to_owned()
            } else {
                field_label(&key).to_owned()
            };
            format!("{label}：{}", translate_validation_message(&item.msg))
        })
        .collect::<Vec<_>>()
        .join("；")
}

/// Best display message for a failed auth/profile request: validation list
/// first, then the literal/pass-through translation, then the caller's
/// fallback copy.
pub fn auth_error_message(err: &ApiError, fallback: &str) -> String {
    if let Some(items) = err.validation_items() {
        let message = format_validation_error(items);
        if !message.is_empty() {
            return message;
        }
    }
    if let Some(text) = err.detail_text() {
        let message = translate_auth_detail(text);
        if !message.is_empty() {
            return message;
        }
    }
    fallback.to_owned()
}

/// Best display message for a failed task submission, falling back the
/// same way as [`auth_error_message`].
pub fn task_error_message(err: &ApiError, fallback: &str) -> String {
    if let Some(text) = err.detail_text() {
        let message = translate_task_detail(text);
        if !message.is_empty() {
            return message;
        }
    }
    fallback.to_owned()
}
