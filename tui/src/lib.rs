mod app;
pub use app::{App, AppView, LOAD_SETTLE_DELAY, describe_load_error};

pub mod cli;
pub mod keys;
pub mod logging;
pub mod preferences;
pub mod terminal;
pub mod theme;
pub mod views;
pub use views::*;
