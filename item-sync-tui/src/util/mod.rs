//! Util layer: terminal setup and logging
//!
//! Infrastructure with no item logic. The terminal is put into raw mode and
//! the alternate screen on start and must be restored on every exit path.
//! Logs go to a file because the screen belongs to the UI.

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
