pub mod color;
pub mod editor;
pub mod form;
pub mod help;
pub mod progress_bar;
pub mod reminder_list;
pub mod status_bar;
