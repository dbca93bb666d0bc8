//! Item list messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMessage {
    // ========== Selection ==========
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,

    // ========== Row actions ==========
    /// Load the selected item into the form
    Edit,
    /// Ask to delete the selected item
    Delete,
}
