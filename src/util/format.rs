//! Display formatting for dates and backend enums.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDateTime};

use crate::net::types::{EnrollmentStatus, SubmissionStatus, TaskType};
use crate::routes::Role;

/// Format a backend ISO timestamp as `YYYY年MM月DD日 HH:mm`.
///
/// Absent values render as `-`; unparseable values render as received.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|v| !v.is_empty()) else {
        return "-".to_owned();
    };
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));
    match parsed {
        Ok(dt) => dt.format("%Y年%m月%d日 %H:%M").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// Role label for a raw backend role id; `未知` for anything unmapped.
pub fn format_role(role_id: Option<i64>) -> &'static str {
    role_id
        .and_then(Role::from_id)
        .map_or("未知", Role::label)
}

pub fn format_task_type(kind: TaskType) -> &'static str {
    match kind {
        TaskType::Assignment => "作业",
        TaskType::Exam => "考试",
    }
}

pub fn format_submission_status(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Submitted => "已提交",
        SubmissionStatus::Graded => "已评分",
        SubmissionStatus::Late => "迟交",
    }
}

pub fn format_enrollment_status(status: EnrollmentStatus) -> &'static str {
    match status {
        EnrollmentStatus::Active => "进行中",
        EnrollmentStatus::Dropped => "已退课",
    }
}

/// A score value for table cells: trailing-zero-free number or `-`.
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) if (value - value.trunc()).abs() < f64::EPSILON => {
            format!("{}", value as i64)
        }
        Some(value) => format!("{value:.1}"),
        None => "-".to_owned(),
    }
}
