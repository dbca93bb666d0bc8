//! Message layer: the bridge between events and updates
//!
//! The event layer translates key presses into messages; the update layer
//! consumes them.
//!
//! - `AppMessage`: top-level message
//! - `FormMessage`: name input and form actions
//! - `ListMessage`: list selection and row actions
//! - `ModalMessage`: confirmation, alert and help dialogs

mod app;
mod form;
mod list;
mod modal;

pub use app::AppMessage;
pub use form::FormMessage;
pub use list::ListMessage;
pub use modal::ModalMessage;
