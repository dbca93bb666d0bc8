//! Focus state

/// Panel that receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Name input of the form
    #[default]
    Form,
    /// Item list
    List,
}

impl FocusPanel {
    /// Switch to the other panel
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Form => FocusPanel::List,
            FocusPanel::List => FocusPanel::Form,
        }
    }

    pub fn is_form(self) -> bool {
        matches!(self, FocusPanel::Form)
    }

    pub fn is_list(self) -> bool {
        matches!(self, FocusPanel::List)
    }
}
