use super::*;

fn profile(role_id: i64) -> User {
    serde_json::from_value(serde_json::json!({
        "id": 7,
        "username": "lin",
        "full_name": "林小明",
        "role_id": role_id,
        "is_active": true,
        "created_at": "2024-03-01T08:00:00"
    }))
    .expect("profile")
}

fn fetch_failed() -> ApiError {
    ApiError::Api {
        status: 401,
        detail: None,
    }
}

// =============================================================
// Defaults and restore
// =============================================================

#[test]
fn default_session_is_anonymous_and_uninitialized() {
    let s = Session::default();
    assert!(s.token.is_none());
    assert!(s.user.is_none());
    assert!(!s.initialized);
    assert!(!s.loading);
    assert!(!s.is_authenticated());
    assert_eq!(s.role_label(), "访客");
}

#[test]
fn restore_keeps_token_but_stays_uninitialized() {
    let s = Session::restore(Some("tok".to_owned()));
    assert!(s.is_authenticated());
    assert!(s.user.is_none());
    assert!(!s.initialized);
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydration_without_token_marks_initialized_immediately() {
    let mut s = Session::default();
    assert_eq!(s.begin_hydration(), HydrationPlan::Anonymous);
    assert!(s.initialized);
    assert!(!s.is_authenticated());
}

#[test]
fn hydration_with_token_plans_a_fetch() {
    let mut s = Session::restore(Some("tok".to_owned()));
    assert_eq!(s.begin_hydration(), HydrationPlan::Fetch("tok".to_owned()));
    assert!(!s.initialized);
}

#[test]
fn hydration_guard_claims_before_any_await() {
    // A second caller entering while the fetch is in flight must not plan
    // a second fetch.
    let mut s = Session::restore(Some("tok".to_owned()));
    assert_eq!(s.begin_hydration(), HydrationPlan::Fetch("tok".to_owned()));
    assert_eq!(s.begin_hydration(), HydrationPlan::Skip);
}

#[test]
fn hydration_is_idempotent_after_resolution() {
    let mut s = Session::restore(Some("tok".to_owned()));
    let _ = s.begin_hydration();
    s.finish_hydration(Ok(profile(1)));
    let snapshot = s.clone();
    assert_eq!(s.begin_hydration(), HydrationPlan::Skip);
    assert_eq!(s, snapshot);
}

#[test]
fn anonymous_hydration_is_idempotent() {
    let mut s = Session::default();
    let _ = s.begin_hydration();
    assert_eq!(s.begin_hydration(), HydrationPlan::Skip);
}

#[test]
fn failed_hydration_clears_the_whole_session() {
    let mut s = Session::restore(Some("stale".to_owned()));
    let _ = s.begin_hydration();
    s.finish_hydration(Err(fetch_failed()));
    assert!(!s.is_authenticated());
    assert!(s.token.is_none());
    assert!(s.user.is_none());
    assert!(s.initialized);
}

#[test]
fn successful_hydration_stores_the_profile() {
    let mut s = Session::restore(Some("tok".to_owned()));
    let _ = s.begin_hydration();
    s.finish_hydration(Ok(profile(2)));
    assert!(s.is_authenticated());
    assert_eq!(s.role(), Some(Role::Instructor));
    assert!(s.initialized);
}

// =============================================================
// Login / logout round trip
// =============================================================

#[test]
fn login_then_logout_returns_to_pristine_state() {
    let mut s = Session::default();
    let _ = s.begin_hydration();
    let pristine = s.clone();

    s.apply_login("tok".to_owned(), profile(1));
    assert!(s.is_authenticated());
    s.clear();

    // Equal to never-logged-in state; `initialized` was already set.
    assert_eq!(s, pristine);
}

#[test]
fn clear_upholds_token_user_pairing() {
    let mut s = Session::default();
    s.apply_login("tok".to_owned(), profile(3));
    s.clear();
    assert!(s.token.is_none());
    assert!(s.user.is_none());
}

// =============================================================
// Derived facts
// =============================================================

#[test]
fn role_and_label_follow_the_profile() {
    let mut s = Session::default();
    s.apply_login("tok".to_owned(), profile(1));
    assert_eq!(s.role(), Some(Role::Learner));
    assert_eq!(s.role_label(), "学生");

    s.apply_profile(profile(3));
    assert_eq!(s.role_label(), "管理员");
}

#[test]
fn unknown_role_id_resolves_to_guest_label() {
    let mut s = Session::default();
    s.apply_login("tok".to_owned(), profile(42));
    assert_eq!(s.role(), None);
    assert_eq!(s.role_label(), "访客");
}

#[test]
fn display_name_prefers_full_name_then_username() {
    let mut s = Session::default();
    assert_eq!(s.display_name(), "");
    s.apply_login("tok".to_owned(), profile(1));
    assert_eq!(s.display_name(), "林小明");

    let mut anonymous_name = profile(1);
    anonymous_name.full_name = None;
    s.apply_profile(anonymous_name);
    assert_eq!(s.display_name(), "lin");
}
