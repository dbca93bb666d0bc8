//! Item Sync Core Library
//!
//! Keeps a list of named items in sync with a remote collection and mediates
//! a single create/edit form:
//! - Form state machine (`FormState`, create and edit mode)
//! - Event dispatch (`FormEvent` -> `Effect`)
//! - Item synchronization controller (`ItemSyncController`)
//!
//! This library has no UI of its own. Front-ends implement the surface traits
//! (`ListRenderer`, `FormView`, `Notifier`) and the remote side is any
//! `item_sync_provider::ItemResource`.

pub mod display;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult, RemoteOp};
pub use services::{dispatch, ItemSyncController};
pub use traits::{FormView, ItemSurface, ListRenderer, Notifier};
pub use types::{
    Effect, FormEvent, FormMode, FormState, Item, ItemId, Notice, NoticeKind, NoticeLevel,
    SubmitAction,
};
