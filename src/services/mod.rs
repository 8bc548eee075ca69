//! Service layer for business logic
//!
//! This module provides a clean abstraction layer between the consumers (text
//! printer, TUI) and the resource stores.

pub mod fleet_service;

pub use fleet_service::{FleetService, FleetView};
