//! Application module
//!
//! The main TUI application state and logic, organized into sub-modules.

pub mod state;

mod async_ops;
mod core;
mod events;
mod rendering;

pub use async_ops::FetchRequest;
pub use core::*;
pub use state::Location;
