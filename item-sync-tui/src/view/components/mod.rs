pub mod form;
pub mod item_list;
pub mod modal;
pub mod statusbar;
