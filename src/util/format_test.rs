use super::*;

#[test]
fn format_date_handles_iso_without_timezone() {
    assert_eq!(
        format_date(Some("2024-03-05T09:30:00")),
        "2024年03月05日 09:30"
    );
}

#[test]
fn format_date_handles_rfc3339() {
    assert_eq!(
        format_date(Some("2024-03-05T09:30:00+00:00")),
        "2024年03月05日 09:30"
    );
}

#[test]
fn format_date_dash_when_absent() {
    assert_eq!(format_date(None), "-");
    assert_eq!(format_date(Some("")), "-");
}

#[test]
fn format_date_passes_unparseable_through() {
    assert_eq!(format_date(Some("soon")), "soon");
}

#[test]
fn format_role_labels() {
    assert_eq!(format_role(Some(1)), "学生");
    assert_eq!(format_role(Some(2)), "教师");
    assert_eq!(format_role(Some(3)), "管理员");
    assert_eq!(format_role(Some(9)), "未知");
    assert_eq!(format_role(None), "未知");
}

#[test]
fn format_enum_labels() {
    assert_eq!(format_task_type(TaskType::Exam), "考试");
    assert_eq!(format_task_type(TaskType::Assignment), "作业");
    assert_eq!(
        format_submission_status(SubmissionStatus::Graded),
        "已评分"
    );
    assert_eq!(format_enrollment_status(EnrollmentStatus::Dropped), "已退课");
}

#[test]
fn format_score_trims_integral_values() {
    assert_eq!(format_score(Some(92.0)), "92");
    assert_eq!(format_score(Some(87.5)), "87.5");
    assert_eq!(format_score(None), "-");
}
