//! Page components, one per route.

pub mod admin;
pub mod admin_announcements;
pub mod announcements;
pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod enrollments;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod scores;
pub mod tasks;
pub mod teaching;

use leptos::prelude::RwSignal;

use crate::net::error::ApiError;
use crate::state::toast::{self, ToastState};

/// Unwrap a page fetch for display: a failure surfaces as one error toast
/// plus a default value, so a broken list never takes the page down.
pub(crate) fn loaded_or_toast<T: Default>(
    result: Result<T, ApiError>,
    toasts: RwSignal<ToastState>,
    what: &str,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            leptos::logging::warn!("{what}: {err}");
            toast::error(toasts, format!("{what}失败"));
            T::default()
        }
    }
}
