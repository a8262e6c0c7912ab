use super::*;

fn anonymous() -> Session {
    let mut s = Session::default();
    let _ = s.begin_hydration();
    s
}

fn logged_in(role_id: i64) -> Session {
    let user = serde_json::from_value(serde_json::json!({
        "id": 1,
        "username": "wang",
        "role_id": role_id,
        "is_active": true,
        "created_at": "2024-03-01T08:00:00"
    }))
    .expect("user");
    let mut s = anonymous();
    s.apply_login("tok".to_owned(), user);
    s
}

// =============================================================
// Role mapping
// =============================================================

#[test]
fn role_id_mapping_round_trips() {
    for role in [Role::Learner, Role::Instructor, Role::Administrator] {
        assert_eq!(Role::from_id(role.id()), Some(role));
    }
    assert_eq!(Role::from_id(0), None);
    assert_eq!(Role::from_id(4), None);
}

// =============================================================
// Route table
// =============================================================

#[test]
fn find_resolves_known_paths() {
    assert_eq!(find("/teaching"), Some(&TEACHING));
    assert_eq!(find("/login"), Some(&LOGIN));
    assert_eq!(find("/nope"), None);
}

#[test]
fn auth_screens_are_the_only_public_routes() {
    for route in ROUTES {
        assert_eq!(
            route.requires_auth,
            !route.auth_screen,
            "unexpected access flags on {}",
            route.path
        );
    }
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn unauthenticated_protected_navigation_redirects_to_login() {
    let session = anonymous();
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(
            decide(&session, route),
            GuardOutcome::RedirectLogin,
            "route {}",
            route.path
        );
    }
}

#[test]
fn authenticated_auth_screen_navigation_redirects_to_dashboard() {
    let session = logged_in(1);
    assert_eq!(decide(&session, &LOGIN), GuardOutcome::RedirectDashboard);
    assert_eq!(decide(&session, &REGISTER), GuardOutcome::RedirectDashboard);
}

#[test]
fn unauthenticated_auth_screen_navigation_is_allowed() {
    let session = anonymous();
    assert_eq!(decide(&session, &LOGIN), GuardOutcome::Allow);
    assert_eq!(decide(&session, &REGISTER), GuardOutcome::Allow);
}

#[test]
fn role_outside_allow_list_is_silently_downgraded() {
    let learner = logged_in(1);
    assert_eq!(decide(&learner, &TEACHING), GuardOutcome::RedirectDashboard);
    assert_eq!(decide(&learner, &ADMIN), GuardOutcome::RedirectDashboard);

    let instructor = logged_in(2);
    assert_eq!(
        decide(&instructor, &ENROLLMENTS),
        GuardOutcome::RedirectDashboard
    );
}

#[test]
fn role_inside_allow_list_is_allowed() {
    assert_eq!(decide(&logged_in(1), &ENROLLMENTS), GuardOutcome::Allow);
    assert_eq!(decide(&logged_in(2), &TEACHING), GuardOutcome::Allow);
    assert_eq!(decide(&logged_in(2), &TASKS), GuardOutcome::Allow);
    assert_eq!(decide(&logged_in(3), &ADMIN), GuardOutcome::Allow);
    assert_eq!(
        decide(&logged_in(3), &ADMIN_ANNOUNCEMENTS),
        GuardOutcome::Allow
    );
}

#[test]
fn unrestricted_routes_admit_any_role() {
    for role_id in [1, 2, 3] {
        let session = logged_in(role_id);
        assert_eq!(decide(&session, &DASHBOARD), GuardOutcome::Allow);
        assert_eq!(decide(&session, &COURSES), GuardOutcome::Allow);
        assert_eq!(decide(&session, &PROFILE), GuardOutcome::Allow);
    }
}

#[test]
fn authentication_check_precedes_role_check() {
    // Anonymous navigation to a role-restricted route must go to login,
    // not to the dashboard.
    let session = anonymous();
    assert_eq!(decide(&session, &ADMIN), GuardOutcome::RedirectLogin);
}

#[test]
fn unresolved_role_passes_the_role_check() {
    // Token restored but profile not fetched yet (or unknown role id).
    let mut session = anonymous();
    session.apply_login("tok".to_owned(), {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "username": "wang",
            "role_id": 9,
            "is_active": true,
            "created_at": "2024-03-01T08:00:00"
        }))
        .expect("user")
    });
    assert_eq!(decide(&session, &ADMIN), GuardOutcome::Allow);
}
