//! Main application message

use super::{FormMessage, ListMessage, ModalMessage};

/// Main application message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Quit the application
    Quit,

    /// Switch focus between form and list
    ToggleFocus,

    /// Form panel messages
    Form(FormMessage),

    /// Item list messages
    List(ListMessage),

    /// Modal messages
    Modal(ModalMessage),

    /// Reload the list from the server
    Refresh,

    /// Show the help modal
    ShowHelp,

    /// Clear the status message
    ClearStatus,

    /// No operation (ignored events)
    Noop,
}
