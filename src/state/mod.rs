//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns the token + profile record and is the single source of
//! truth for "who is the current actor"; `toast` carries transient
//! operation feedback. Each is one `RwSignal` provided via context from
//! `App`, injected explicitly wherever it is needed so tests never touch
//! a process-wide singleton.

pub mod session;
pub mod toast;
