//! User Interface module
//!
//! Terminal front end using ratatui. Consumes render updates only.

pub mod app;
pub mod input;

pub use app::App;
pub use input::map_key;
