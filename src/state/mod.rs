//! Application state module

mod app_state;
mod forms;
mod patient;

pub use app_state::*;
pub use forms::*;
pub use patient::*;
