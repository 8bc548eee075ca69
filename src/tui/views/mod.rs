//! TUI view components
//!
//! Each component renders one part of the interface.

mod footer;
mod header;
pub mod helpers;
mod table;

pub use footer::*;
pub use header::*;
pub use table::*;
