//! Cross-cutting helpers: token persistence, backend message translation,
//! and display formatting.

pub mod format;
pub mod messages;
pub mod storage;
