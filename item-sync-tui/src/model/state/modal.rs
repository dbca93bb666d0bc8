//! Modal state

use item_sync_core::ItemId;

/// Focus index of the Cancel button in the delete confirmation
pub const CONFIRM_FOCUS_CANCEL: usize = 0;
/// Focus index of the Delete button in the delete confirmation
pub const CONFIRM_FOCUS_DELETE: usize = 1;

/// Modal dialogs; each variant carries the data it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Asks before an item is deleted
    ConfirmDelete {
        item_id: ItemId,
        item_name: String,
        /// 0 = Cancel, 1 = Delete
        focus: usize,
    },
    /// Blocking notice; any key closes it
    Alert { title: String, message: String },
    /// Key reference
    Help,
}

/// Active modal, if any
#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Ask for delete confirmation; Cancel has the initial focus
    pub fn show_confirm_delete(&mut self, item_id: ItemId, item_name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            item_id,
            item_name: item_name.to_string(),
            focus: CONFIRM_FOCUS_CANCEL,
        });
    }

    pub fn show_alert(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }
}
