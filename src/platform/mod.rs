//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Tick timer (setInterval on web, sleeping loop natively)
//! - Storage (LocalStorage on web, see `persistence`)

pub mod timer;

pub use timer::{TickTimer, TimerCommand};
