//! Panel and modal state

mod form_input;
mod item_list;
mod modal;

pub use form_input::FormInputState;
pub use item_list::ItemListState;
pub use modal::{Modal, ModalState, CONFIRM_FOCUS_CANCEL, CONFIRM_FOCUS_DELETE};
