//! Session store: token lifecycle, lazy hydration, and profile state.
//!
//! DESIGN
//! ======
//! `Session` is a plain record with pure transition methods; every rule
//! about the token/profile lifecycle lives in those transitions so they
//! can be tested natively. The async functions below are thin
//! orchestration: read the plan from the signal, talk to the backend,
//! write the outcome back, and mirror token changes into durable storage.
//!
//! Hydration is fail-closed: a persisted token that cannot be resolved
//! into a profile is treated as no token at all, and the stored copy is
//! removed. The in-flight guard is claimed synchronously, before the
//! first await, so overlapping callers during startup cannot trigger a
//! second profile fetch.
//!
//! ERROR HANDLING
//! ==============
//! Every operation catches its own failure, reports it through a toast,
//! and resolves to a `bool`; nothing propagates to the caller as an error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api;
use crate::net::api::auth::RegisterPayload;
use crate::net::api::users::UpdateProfilePayload;
use crate::net::error::ApiError;
use crate::net::types::User;
use crate::routes::Role;
use crate::state::toast::{self, ToastState};
use crate::util::messages;
use crate::util::storage;

/// The client-held authentication record.
///
/// Invariant: `token` absent implies `user` absent. `initialized` flips to
/// true exactly once, after the first hydration attempt resolves either way.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub initialized: bool,
    pub loading: bool,
    hydrating: bool,
}

/// What `begin_hydration` decided, claimed synchronously.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HydrationPlan {
    /// Already initialized, or a hydration is in flight.
    Skip,
    /// No persisted token; the session stays anonymous.
    Anonymous,
    /// Resolve this token into a profile.
    Fetch(String),
}

impl Session {
    /// Session at process start, with whatever token storage held.
    pub fn restore(token: Option<String>) -> Self {
        Self {
            token,
            ..Self::default()
        }
    }

    /// Synchronous check-then-set step of hydration. Must be called inside
    /// a single `update` so no await point can interleave: a second caller
    /// observes either `initialized` or the in-flight flag and skips.
    pub fn begin_hydration(&mut self) -> HydrationPlan {
        if self.initialized || self.hydrating {
            return HydrationPlan::Skip;
        }
        match &self.token {
            None => {
                self.initialized = true;
                HydrationPlan::Anonymous
            }
            Some(token) => {
                self.hydrating = true;
                HydrationPlan::Fetch(token.clone())
            }
        }
    }

    /// Resolve the hydration attempt. Failure of any kind clears the whole
    /// session (fail-closed); `initialized` is set on both paths.
    pub fn finish_hydration(&mut self, profile: Result<User, ApiError>) {
        match profile {
            Ok(user) => self.user = Some(user),
            Err(_) => self.clear(),
        }
        self.hydrating = false;
        self.initialized = true;
    }

    /// Adopt a fresh token + profile after a successful login.
    pub fn apply_login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Replace the profile wholesale.
    pub fn apply_profile(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drop token and profile together, upholding the pairing invariant.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|user| Role::from_id(user.role_id))
    }

    /// Human-readable role, `访客` when anonymous or unresolved.
    pub fn role_label(&self) -> &'static str {
        self.role().map_or("访客", Role::label)
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|user| {
                user.full_name
                    .clone()
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| user.username.clone())
            })
            .unwrap_or_default()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|user| user.id)
    }
}

/// Resolve the persisted token into a profile, once per process lifetime.
/// Idempotent: later calls, concurrent ones included, are no-ops.
pub async fn initialize(session: RwSignal<Session>) {
    let mut plan = HydrationPlan::Skip;
    session.update(|s| plan = s.begin_hydration());
    if !matches!(plan, HydrationPlan::Fetch(_)) {
        return;
    }
    let profile = api::users::me().await;
    if profile.is_err() {
        storage::clear_token();
    }
    session.update(|s| s.finish_hydration(profile));
}

/// Exchange credentials for a token and load the profile. On failure the
/// session is left untouched and the translated backend message is shown.
pub async fn login(
    session: RwSignal<Session>,
    toasts: RwSignal<ToastState>,
    username: &str,
    password: &str,
) -> bool {
    session.update(|s| s.loading = true);
    let outcome = match api::auth::login(username, password).await {
        Ok(token) => {
            storage::save_token(&token.access_token);
            match api::users::me().await {
                Ok(user) => Ok((token.access_token, user)),
                Err(err) => {
                    // Token exchanged but unusable; do not keep it around.
                    storage::clear_token();
                    Err(err)
                }
            }
        }
        Err(err) => Err(err),
    };
    session.update(|s| s.loading = false);
    match outcome {
        Ok((token, user)) => {
            session.update(|s| s.apply_login(token, user));
            toast::success(toasts, "登录成功，欢迎回来");
            true
        }
        Err(err) => {
            toast::error(
                toasts,
                messages::auth_error_message(&err, "登录失败，请检查账号或密码"),
            );
            false
        }
    }
}

/// Create an account. Success does not log the user in; they are sent to
/// the login screen instead.
pub async fn register(
    session: RwSignal<Session>,
    toasts: RwSignal<ToastState>,
    payload: &RegisterPayload,
) -> bool {
    session.update(|s| s.loading = true);
    let result = api::auth::register(payload).await;
    session.update(|s| s.loading = false);
    match result {
        Ok(_) => {
            toast::success(toasts, "注册成功，请登录");
            true
        }
        Err(err) => {
            toast::error(
                toasts,
                messages::auth_error_message(&err, "注册失败，请检查输入"),
            );
            false
        }
    }
}

/// Re-fetch the profile in place. Softer than hydration: failure is
/// reported but does not clear the session.
pub async fn refresh_profile(session: RwSignal<Session>, toasts: RwSignal<ToastState>) {
    match api::users::me().await {
        Ok(user) => session.update(|s| s.apply_profile(user)),
        Err(_) => toast::error(toasts, "获取用户信息失败"),
    }
}

/// Update the profile; the payload carries the current password as
/// confirmation. The stored profile is replaced with the server's response.
pub async fn update_profile(
    session: RwSignal<Session>,
    toasts: RwSignal<ToastState>,
    payload: &UpdateProfilePayload,
) -> bool {
    session.update(|s| s.loading = true);
    let result = api::users::update_me(payload).await;
    session.update(|s| s.loading = false);
    match result {
        Ok(user) => {
            session.update(|s| s.apply_profile(user));
            toast::success(toasts, "个人信息已更新");
            true
        }
        Err(err) => {
            toast::error(toasts, messages::auth_error_message(&err, "更新失败"));
            false
        }
    }
}

/// Unconditionally drop the session and the persisted token.
pub fn logout(session: RwSignal<Session>, toasts: RwSignal<ToastState>) {
    storage::clear_token();
    session.update(Session::clear);
    toast::success(toasts, "已退出登录");
}
