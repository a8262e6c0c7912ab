//! REST bindings, one function per backend endpoint, grouped by resource.
//!
//! These are thin: build the path, delegate to `http`, hand back the typed
//! result. Interpretation of failures (translated messages, session
//! clearing) is the caller's job, usually `state::session` or a page.

use serde::{Deserialize, Serialize};

use super::error::ApiError;
use super::http;
use super::types::{
    Announcement, Course, CourseCategory, Enrollment, EnrollmentWithCourse,
    EnrollmentWithStudent, Score, Section, Submission, SubmissionStatus, SubmissionWithStudent,
    Task, TaskType, TokenResponse, UploadResponse, User,
};

/// Generic `{ "message": ... }` acknowledgement body.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    /// Echoed verification code in development setups.
    #[serde(default)]
    pub code: Option<String>,
}

pub mod auth {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct RegisterPayload {
        pub username: String,
        pub password: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub full_name: Option<String>,
        pub role_id: i64,
    }

    #[derive(Clone, Debug, Serialize)]
    pub struct PasswordResetConfirm {
        pub email: String,
        pub code: String,
        pub new_password: String,
    }

    /// Exchange credentials for a token. Form-encoded, per the backend's
    /// OAuth2 password-flow endpoint.
    pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        http::post_form("/auth/login", &[("username", username), ("password", password)]).await
    }

    pub async fn register(payload: &RegisterPayload) -> Result<User, ApiError> {
        http::post_json("/auth/register", payload).await
    }

    pub async fn request_password_reset(email: &str) -> Result<MessageResponse, ApiError> {
        http::post_json(
            "/auth/password-reset/request",
            &serde_json::json!({ "email": email }),
        )
        .await
    }

    pub async fn confirm_password_reset(
        payload: &PasswordResetConfirm,
    ) -> Result<MessageResponse, ApiError> {
        http::post_json("/auth/password-reset/confirm", payload).await
    }
}

pub mod users {
    use super::*;

    /// Profile update; `old_password` confirms the current password and is
    /// required by the backend for any change.
    #[derive(Clone, Debug, Default, Serialize)]
    pub struct UpdateProfilePayload {
        pub old_password: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub full_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub password: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub avatar_url: Option<String>,
    }

    pub async fn me() -> Result<User, ApiError> {
        http::get_json("/users/me").await
    }

    pub async fn update_me(payload: &UpdateProfilePayload) -> Result<User, ApiError> {
        http::put_json("/users/me", payload).await
    }

    pub async fn verify_password(password: &str) -> Result<(), ApiError> {
        http::post_json::<_, serde_json::Value>(
            "/users/verify-password",
            &serde_json::json!({ "password": password }),
        )
        .await
        .map(|_| ())
    }
}

pub mod courses {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct CoursePayload {
        pub title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub cover_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category_id: Option<i64>,
    }

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct CourseUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub cover_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category_id: Option<i64>,
    }

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct CategoryPayload {
        pub name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
    }

    pub async fn list() -> Result<Vec<Course>, ApiError> {
        http::get_json("/courses/").await
    }

    pub async fn get(id: i64) -> Result<Course, ApiError> {
        http::get_json(&format!("/courses/{id}")).await
    }

    pub async fn create(payload: &CoursePayload) -> Result<Course, ApiError> {
        http::post_json("/courses/", payload).await
    }

    pub async fn update(id: i64, payload: &CourseUpdate) -> Result<Course, ApiError> {
        http::put_json(&format!("/courses/{id}"), payload).await
    }

    pub async fn delete(id: i64) -> Result<Course, ApiError> {
        http::delete_json(&format!("/courses/{id}")).await
    }

    pub async fn list_categories() -> Result<Vec<CourseCategory>, ApiError> {
        http::get_json("/courses/categories/").await
    }

    pub async fn create_category(payload: &CategoryPayload) -> Result<CourseCategory, ApiError> {
        http::post_json("/courses/categories/", payload).await
    }
}

pub mod sections {
    use super::*;

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct SectionPayload {
        pub course_id: i64,
        pub title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub material_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub video_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_index: Option<i64>,
    }

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct SectionUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub material_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub video_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub order_index: Option<i64>,
    }

    pub async fn list(course_id: i64) -> Result<Vec<Section>, ApiError> {
        http::get_json(&format!("/courses/{course_id}/sections")).await
    }

    pub async fn create(course_id: i64, payload: &SectionPayload) -> Result<Section, ApiError> {
        http::post_json(&format!("/courses/{course_id}/sections"), payload).await
    }

    pub async fn update(id: i64, payload: &SectionUpdate) -> Result<Section, ApiError> {
        http::put_json(&format!("/sections/{id}"), payload).await
    }

    pub async fn delete(id: i64) -> Result<Section, ApiError> {
        http::delete_json(&format!("/sections/{id}")).await
    }
}

pub mod enrollments {
    use super::*;

    pub async fn enroll(course_id: i64, student_id: i64) -> Result<Enrollment, ApiError> {
        http::post_json(
            &format!("/courses/{course_id}/enroll"),
            &serde_json::json!({ "student_id": student_id }),
        )
        .await
    }

    pub async fn drop(course_id: i64, student_id: i64) -> Result<Enrollment, ApiError> {
        http::post_json(
            &format!("/courses/{course_id}/drop"),
            &serde_json::json!({ "student_id": student_id }),
        )
        .await
    }

    pub async fn my_enrollments(student_id: i64) -> Result<Vec<EnrollmentWithCourse>, ApiError> {
        http::get_json(&format!("/me/enrollments?student_id={student_id}")).await
    }

    pub async fn course_students(
        course_id: i64,
    ) -> Result<Vec<EnrollmentWithStudent>, ApiError> {
        http::get_json(&format!("/courses/{course_id}/students")).await
    }
}

pub mod tasks {
    use super::*;

    #[derive(Clone, Debug, Serialize)]
    pub struct TaskPayload {
        pub teacher_id: i64,
        pub title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_url: Option<String>,
        #[serde(rename = "type")]
        pub kind: TaskType,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub deadline: Option<String>,
    }

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct TaskUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_url: Option<String>,
        #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
        pub kind: Option<TaskType>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub deadline: Option<String>,
    }

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct SubmitPayload {
        pub student_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub answer_text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub file_url: Option<String>,
    }

    #[derive(Clone, Debug, Serialize)]
    pub struct GradePayload {
        pub score: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub feedback: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub status: Option<SubmissionStatus>,
    }

    pub async fn create(course_id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
        http::post_json(&format!("/courses/{course_id}/tasks"), payload).await
    }

    pub async fn list(course_id: i64) -> Result<Vec<Task>, ApiError> {
        http::get_json(&format!("/courses/{course_id}/tasks")).await
    }

    pub async fn get(task_id: i64) -> Result<Task, ApiError> {
        http::get_json(&format!("/tasks/{task_id}")).await
    }

    pub async fn update(task_id: i64, payload: &TaskUpdate) -> Result<Task, ApiError> {
        http::put_json(&format!("/tasks/{task_id}"), payload).await
    }

    pub async fn delete(task_id: i64) -> Result<(), ApiError> {
        http::delete_empty(&format!("/tasks/{task_id}")).await
    }

    pub async fn submit(task_id: i64, payload: &SubmitPayload) -> Result<Submission, ApiError> {
        http::post_json(&format!("/tasks/{task_id}/submit"), payload).await
    }

    pub async fn grade(
        submission_id: i64,
        payload: &GradePayload,
    ) -> Result<Submission, ApiError> {
        http::put_json(&format!("/submissions/{submission_id}/grade"), payload).await
    }

    pub async fn submissions(task_id: i64) -> Result<Vec<SubmissionWithStudent>, ApiError> {
        http::get_json(&format!("/tasks/{task_id}/submissions")).await
    }

    pub async fn my_submissions(course_id: i64) -> Result<Vec<Submission>, ApiError> {
        http::get_json(&format!("/courses/{course_id}/my-submissions")).await
    }
}

pub mod scores {
    use super::*;

    #[derive(Clone, Debug, Deserialize)]
    struct CountResponse {
        count: i64,
    }

    pub async fn my_scores(student_id: i64) -> Result<Vec<Score>, ApiError> {
        http::get_json(&format!("/me/scores?student_id={student_id}")).await
    }

    pub async fn course_scores(course_id: i64) -> Result<Vec<Score>, ApiError> {
        http::get_json(&format!("/courses/{course_id}/scores")).await
    }

    /// CSV export of a course's score sheet.
    pub async fn export(course_id: i64) -> Result<String, ApiError> {
        http::get_text(&format!("/courses/{course_id}/scores/export")).await
    }

    /// Number of submissions awaiting grading across the instructor's courses.
    pub async fn pending_grading_count() -> Result<i64, ApiError> {
        http::get_json::<CountResponse>("/teacher/pending-grading-count")
            .await
            .map(|body| body.count)
    }
}

pub mod admin {
    use super::*;

    #[derive(Clone, Debug, Serialize)]
    pub struct AdminUserCreate {
        pub username: String,
        pub password: String,
        pub role_id: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub full_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub avatar_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_active: Option<bool>,
    }

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct AdminUserUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub full_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub avatar_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub password: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_active: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub role_id: Option<i64>,
    }

    #[derive(Clone, Debug, Serialize)]
    pub struct AnnouncementCreate {
        pub title: String,
        pub content: String,
        pub created_by: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_active: Option<bool>,
    }

    #[derive(Clone, Debug, Default, Serialize)]
    pub struct AnnouncementUpdate {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub content: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub is_active: Option<bool>,
    }

    #[derive(Clone, Debug, Deserialize)]
    pub struct CourseDeactivation {
        pub course_id: i64,
        pub is_active: bool,
    }

    pub async fn create_user(payload: &AdminUserCreate) -> Result<User, ApiError> {
        http::post_json("/admin/users", payload).await
    }

    pub async fn update_user(user_id: i64, payload: &AdminUserUpdate) -> Result<User, ApiError> {
        http::put_json(&format!("/admin/users/{user_id}"), payload).await
    }

    pub async fn delete_user(user_id: i64) -> Result<User, ApiError> {
        http::delete_json(&format!("/admin/users/{user_id}")).await
    }

    pub async fn list_users(role_id: Option<i64>) -> Result<Vec<User>, ApiError> {
        let path = match role_id {
            Some(id) => format!("/admin/users?role_id={id}"),
            None => "/admin/users".to_owned(),
        };
        http::get_json(&path).await
    }

    pub async fn deactivate_course(course_id: i64) -> Result<CourseDeactivation, ApiError> {
        http::delete_json(&format!("/admin/courses/{course_id}")).await
    }

    pub async fn list_announcements(
        include_inactive: bool,
    ) -> Result<Vec<Announcement>, ApiError> {
        http::get_json(&format!(
            "/admin/announcements?include_inactive={include_inactive}"
        ))
        .await
    }

    pub async fn create_announcement(
        payload: &AnnouncementCreate,
    ) -> Result<Announcement, ApiError> {
        http::post_json("/admin/announcements", payload).await
    }

    pub async fn update_announcement(
        id: i64,
        payload: &AnnouncementUpdate,
    ) -> Result<Announcement, ApiError> {
        http::put_json(&format!("/admin/announcements/{id}"), payload).await
    }

    pub async fn delete_announcement(id: i64) -> Result<Announcement, ApiError> {
        http::delete_json(&format!("/admin/announcements/{id}")).await
    }
}

pub mod uploads {
    use super::*;

    /// Upload a file picked in the browser; the backend answers with the
    /// stored URL. Browser-only since it handles a `web_sys::File`.
    #[cfg(feature = "hydrate")]
    pub async fn upload(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("could not build form data".to_owned()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Network("could not attach file".to_owned()))?;
        http::post_multipart("/uploads", form).await
    }

    #[cfg(not(feature = "hydrate"))]
    pub async fn upload() -> Result<UploadResponse, ApiError> {
        Err(ApiError::Unsupported)
    }
}
