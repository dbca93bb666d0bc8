//! Item list state

use item_sync_core::Item;

/// Item list panel state
#[derive(Debug, Default)]
pub struct ItemListState {
    /// Rows of the most recent successful load, in server order
    pub items: Vec<Item>,
    /// Selected row
    pub selected: usize,
}

impl ItemListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.items.is_empty() && self.selected < self.items.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        if !self.items.is_empty() {
            self.selected = self.items.len() - 1;
        }
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    /// Replace the rows; the selection index is kept when still in range
    pub fn set_items(&mut self, items: &[Item]) {
        self.items = items.to_vec();
        self.selected = self.selected.min(self.items.len().saturating_sub(1));
    }
}
