//! Front-end abstraction traits

mod surface;

pub use surface::{FormView, ItemSurface, ListRenderer, Notifier};
