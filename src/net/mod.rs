//! Network layer: typed REST bindings for the course platform backend.
//!
//! DESIGN
//! ======
//! `types` holds the serde mirror of the backend's JSON schemas, `error`
//! the structured failure type shared with the message translator, `http`
//! the transport helpers (bearer injection, status/body handling), and
//! `api` one function per backend endpoint, grouped by resource.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
