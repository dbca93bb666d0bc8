//! Business logic service layer

mod event_dispatch;
mod item_sync_controller;

pub use event_dispatch::dispatch;
pub use item_sync_controller::ItemSyncController;
