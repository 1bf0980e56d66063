//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick driven only, the caller owns the timer
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod food;
pub mod state;
pub mod tick;

pub use autopilot::choose_direction;
pub use food::place_food;
pub use state::{
    Direction, GameEvent, GameOverReason, GamePhase, GameState, Position, Snapshot,
};
pub use tick::{next_speed, tick};
