//! # classhub-web
//!
//! Leptos + WASM frontend for the ClassHub course-management platform:
//! authentication and session hydration, role-gated routing, and CRUD
//! screens for courses, enrollments, tasks, scores, announcements, and
//! administration over the platform's REST backend.
//!
//! The crate compiles natively without the `hydrate` feature so the pure
//! logic (session transitions, guard decisions, message translation) is
//! testable off-browser; everything touching the DOM or the network is
//! feature-gated.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// Browser entry point: set up panic reporting and console logging, then
/// mount the application to `<body>`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
