//! Route descriptors and the navigation-guard decision.
//!
//! DESIGN
//! ======
//! Every navigable path has a static [`RouteAccess`] descriptor; the table
//! is configuration, never mutated at runtime. [`decide`] is the whole
//! guard policy as a pure function so it can be tested without a router:
//! authentication is checked before roles, and a role mismatch downgrades
//! silently to the dashboard instead of surfacing an error page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Session;

/// Actor classification, mirroring the backend's role ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Learner,
    Instructor,
    Administrator,
}

impl Role {
    /// Map a backend role id (1/2/3) to the named role.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Learner),
            2 => Some(Self::Instructor),
            3 => Some(Self::Administrator),
            _ => None,
        }
    }

    pub fn id(self) -> i64 {
        match self {
            Self::Learner => 1,
            Self::Instructor => 2,
            Self::Administrator => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Learner => "学生",
            Self::Instructor => "教师",
            Self::Administrator => "管理员",
        }
    }
}

/// Static access descriptor for one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteAccess {
    pub path: &'static str,
    pub requires_auth: bool,
    /// When present, only these roles may enter.
    pub roles: Option<&'static [Role]>,
    /// Login/register screens, off-limits once authenticated.
    pub auth_screen: bool,
}

impl RouteAccess {
    const fn protected(path: &'static str) -> Self {
        Self {
            path,
            requires_auth: true,
            roles: None,
            auth_screen: false,
        }
    }

    const fn restricted(path: &'static str, roles: &'static [Role]) -> Self {
        Self {
            path,
            requires_auth: true,
            roles: Some(roles),
            auth_screen: false,
        }
    }

    const fn auth_screen(path: &'static str) -> Self {
        Self {
            path,
            requires_auth: false,
            roles: None,
            auth_screen: true,
        }
    }
}

pub static DASHBOARD: RouteAccess = RouteAccess::protected("/");
pub static COURSES: RouteAccess = RouteAccess::protected("/courses");
pub static COURSE_DETAIL: RouteAccess = RouteAccess::protected("/courses/:id");
pub static ENROLLMENTS: RouteAccess =
    RouteAccess::restricted("/enrollments", &[Role::Learner]);
pub static TASKS: RouteAccess =
    RouteAccess::restricted("/tasks", &[Role::Learner, Role::Instructor]);
pub static SCORES: RouteAccess =
    RouteAccess::restricted("/scores", &[Role::Learner, Role::Instructor]);
pub static TEACHING: RouteAccess = RouteAccess::restricted("/teaching", &[Role::Instructor]);
pub static ANNOUNCEMENTS: RouteAccess = RouteAccess::protected("/announcements");
pub static ADMIN: RouteAccess = RouteAccess::restricted("/admin", &[Role::Administrator]);
pub static ADMIN_ANNOUNCEMENTS: RouteAccess =
    RouteAccess::restricted("/admin/announcements", &[Role::Administrator]);
pub static PROFILE: RouteAccess = RouteAccess::protected("/profile");
pub static LOGIN: RouteAccess = RouteAccess::auth_screen("/login");
pub static REGISTER: RouteAccess = RouteAccess::auth_screen("/register");

/// Ordered routing table, consumed by the guard and the navigation menu.
pub static ROUTES: &[&RouteAccess] = &[
    &DASHBOARD,
    &COURSES,
    &COURSE_DETAIL,
    &ENROLLMENTS,
    &TASKS,
    &SCORES,
    &TEACHING,
    &ANNOUNCEMENTS,
    &ADMIN,
    &ADMIN_ANNOUNCEMENTS,
    &PROFILE,
    &LOGIN,
    &REGISTER,
];

pub fn find(path: &str) -> Option<&'static RouteAccess> {
    ROUTES.iter().find(|route| route.path == path).copied()
}

/// Outcome of gating one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    RedirectLogin,
    RedirectDashboard,
}

/// Gate a navigation attempt. Strict ordering: authentication first, then
/// the auth-screen bounce, then the role allow-list.
///
/// A session whose role cannot be determined (no profile yet) passes the
/// role check; the page itself will render nothing sensitive without a
/// profile.
pub fn decide(session: &Session, route: &RouteAccess) -> GuardOutcome {
    if route.requires_auth && !session.is_authenticated() {
        return GuardOutcome::RedirectLogin;
    }
    if route.auth_screen && session.is_authenticated() {
        return GuardOutcome::RedirectDashboard;
    }
    if let (Some(allowed), Some(role)) = (route.roles, session.role()) {
        if !allowed.contains(&role) {
            return GuardOutcome::RedirectDashboard;
        }
    }
    GuardOutcome::Allow
}
