//! Game settings
//!
//! Board shape and starting pace. The speed floor, speed step and points per
//! food are fixed game rules in `consts` and cannot be configured.

use crate::consts::*;

/// Smallest board that still fits the starting snake with room to turn
pub const MIN_GRID_SIZE: i32 = 5;
/// Largest board supported by the phone screen layout
pub const MAX_GRID_SIZE: i32 = 64;

/// Tunable session setup
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Board edge length in cells
    pub grid_size: i32,
    /// Tick period at session start (ms)
    pub initial_speed_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_speed_ms: INITIAL_SPEED_MS,
        }
    }
}

impl Settings {
    /// Clamp values into a playable range
    pub fn validated(mut self) -> Self {
        self.grid_size = self.grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        self.initial_speed_ms = self.initial_speed_ms.max(MIN_SPEED_MS);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference() {
        let s = Settings::default();
        assert_eq!(s.grid_size, 15);
        assert_eq!(s.initial_speed_ms, 150);
    }

    #[test]
    fn test_validated_clamps() {
        let s = Settings {
            grid_size: 2,
            initial_speed_ms: 10,
        }
        .validated();
        assert_eq!(s.grid_size, MIN_GRID_SIZE);
        assert_eq!(s.initial_speed_ms, MIN_SPEED_MS);

        let s = Settings {
            grid_size: 500,
            initial_speed_ms: 300,
        }
        .validated();
        assert_eq!(s.grid_size, MAX_GRID_SIZE);
        assert_eq!(s.initial_speed_ms, 300);
    }
}
