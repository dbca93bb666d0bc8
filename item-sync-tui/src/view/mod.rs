//! View layer: draws the model
//!
//! Pure functions of `&App`; nothing here changes state.

mod components;
mod layout;
pub mod theme;

pub use layout::render;
