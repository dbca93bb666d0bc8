//! Event layer: turns terminal input into messages
//!
//! Key routing order:
//! 1. An open modal takes every key
//! 2. Global shortcuts (quit, help, reload, switch panel)
//! 3. The focused panel (form input or item list)

mod handler;
mod keymap;

pub use handler::{discard_pending, handle_event, poll_event};
