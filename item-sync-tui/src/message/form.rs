//! Form panel messages

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    // ========== Text editing ==========
    /// Type a character at the cursor
    Input(char),
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,

    // ========== Actions ==========
    /// Add or update, depending on the form mode
    Submit,
    /// Leave edit mode
    Cancel,
}
