//! Model layer: application state
//!
//! Plain data only. The update layer changes it; the view layer reads it.
//!
//! - `App`: root state (focus, panels, modal, status line)
//! - `FocusPanel`: which panel receives keys (form or list)
//! - `state/`: per-panel state and the modal dialogs

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{
    FormInputState, ItemListState, Modal, ModalState, CONFIRM_FOCUS_CANCEL, CONFIRM_FOCUS_DELETE,
};
