//! Modal messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// Close the modal (declines a delete confirmation)
    Close,

    /// Activate the focused button
    Confirm,

    /// Move focus between the confirmation buttons
    ToggleFocus,
}
