//! Main application state

use chrono::{DateTime, Local};

use super::{FocusPanel, FormInputState, ItemListState, ModalState};

/// Main application state
pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,

    /// Panel that receives key input
    pub focus: FocusPanel,

    /// Form panel
    pub form: FormInputState,

    /// Item list panel
    pub items: ItemListState,

    /// Modal state
    pub modal: ModalState,

    /// Status bar message
    pub status_message: Option<String>,

    /// Time of the last successful list load
    pub last_sync: Option<DateTime<Local>>,

    /// Set after a remote call; input typed while it ran is discarded
    pub discard_pending_input: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::default(),
            form: FormInputState::new(),
            items: ItemListState::new(),
            modal: ModalState::new(),
            status_message: None,
            last_sync: None,
            discard_pending_input: false,
        }
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
