//! Type definitions

mod effect;
mod event;
mod form;
mod notice;

pub use effect::Effect;
pub use event::FormEvent;
pub use form::{FormMode, FormState, SubmitAction};
pub use notice::{Notice, NoticeKind, NoticeLevel};

// Re-export the provider's item types
pub use item_sync_provider::{Item, ItemId, ItemPayload};
