pub mod cli;
pub mod config;
pub mod models;
pub mod store;
pub mod tui;
pub mod utils;

pub use config::Config;
pub use models::{Reminder, ReminderId};
pub use store::{ReminderStore, StoreEvent};
pub use utils::Profile;
