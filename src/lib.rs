//! Pocket Snake - classic grid snake on a retro phone screen
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, food, lifecycle)
//! - `game`: Simulation bound to persisted high score storage
//! - `platform`: Browser/native platform abstraction (tick timer)
//! - `persistence`: Key-value storage seam (LocalStorage on web)
//! - `input`: Keyboard mapping to game commands

pub mod game;
pub mod highscore;
pub mod input;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::SnakeGame;
pub use highscore::HighScore;
pub use settings::Settings;

/// Game configuration constants (reference instance)
pub mod consts {
    /// Board is `GRID_SIZE` x `GRID_SIZE` cells
    pub const GRID_SIZE: i32 = 15;
    /// Segments in a freshly spawned snake
    pub const INITIAL_SNAKE_LENGTH: usize = 3;

    /// Tick period at the start of a session (ms)
    pub const INITIAL_SPEED_MS: u32 = 150;
    /// Period reduction per food eaten (ms)
    pub const SPEED_STEP_MS: u32 = 2;
    /// Fastest allowed tick period (ms)
    pub const MIN_SPEED_MS: u32 = 50;

    /// Points per food
    pub const FOOD_SCORE: u64 = 10;
}
