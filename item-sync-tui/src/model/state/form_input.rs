//! Form panel state: the live name buffer and what the form currently shows

use item_sync_core::display::literal_text;
use item_sync_core::{FormState, ItemId, SubmitAction};
use unicode_width::UnicodeWidthStr;

/// Form panel state
///
/// `text` is the live input buffer. The controller replaces it through
/// [`FormInputState::load`] when it starts an edit or resets the form.
#[derive(Debug, Clone)]
pub struct FormInputState {
    /// Current text of the name field
    pub text: String,
    /// Cursor position, in chars
    pub cursor: usize,
    /// Item being edited, mirrored from the controller
    pub editing_id: Option<ItemId>,
    /// Label of the submit affordance
    pub submit_action: SubmitAction,
    /// Whether the cancel affordance is shown
    pub cancel_visible: bool,
}

impl Default for FormInputState {
    fn default() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            editing_id: None,
            submit_action: SubmitAction::Add,
            cancel_visible: false,
        }
    }
}

impl FormInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror a form pushed by the controller; the cursor goes to the end
    pub fn load(&mut self, form: &FormState) {
        self.text = form.draft_name().to_string();
        self.cursor = self.text.chars().count();
        self.editing_id = form.editing_id().cloned();
        self.submit_action = form.submit_action();
        self.cancel_visible = form.cancel_visible();
    }

    /// Byte offset of the cursor
    fn byte_index(&self) -> usize {
        self.text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn insert(&mut self, ch: char) {
        let index = self.byte_index();
        self.text.insert(index, ch);
        self.cursor += 1;
    }

    /// Delete the char before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.text.remove(index);
    }

    /// Delete the char under the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let index = self.byte_index();
            self.text.remove(index);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Text as drawn on screen; a name loaded from the server may carry
    /// control characters
    pub fn display_text(&self) -> std::borrow::Cow<'_, str> {
        literal_text(&self.text)
    }

    /// Display columns between the start of the drawn text and the cursor
    pub fn cursor_column(&self) -> usize {
        literal_text(&self.text[..self.byte_index()]).width()
    }
}
