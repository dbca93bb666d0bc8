//! UI surface abstraction
//!
//! The controller never draws anything itself. A front-end implements these
//! traits and the controller pushes list contents, form state and notices
//! through them.
//!
//! Platform implementation:
//! - TUI: `TuiSurface` (ratatui)

use crate::types::{FormState, Item, Notice};

/// Projects the item list
pub trait ListRenderer {
    /// Replace the rendered list with `items`, one row per item in the given order
    ///
    /// Each row offers edit and delete affordances keyed by the item id.
    /// Names are untrusted and must be shown as literal text
    /// (see [`crate::display::literal_text`]).
    fn render(&mut self, items: &[Item]);
}

/// Mirrors the create/edit form
pub trait FormView {
    /// Show the draft name, the submit label and the cancel affordance of `form`
    fn show_form(&mut self, form: &FormState);

    /// Move input focus to the name field
    fn focus_name_input(&mut self) {}
}

/// Reports notices to the user
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Everything the controller needs from a front-end
pub trait ItemSurface: ListRenderer + FormView + Notifier {}

impl<T: ListRenderer + FormView + Notifier + ?Sized> ItemSurface for T {}
