//! Pathmenu API - Shared types for the context-action resolver.
//!
//! A host (launcher plugin, CLI, IPC client) only needs these types to
//! describe a located filesystem entry and to render the actions offered
//! for it. Resolution and execution live in `pathmenu-kernel`.

mod action;
mod entry;
mod keys;

pub use action::*;
pub use entry::*;
pub use keys::*;
