//! Best score across sessions
//!
//! A single integer persisted under a fixed key. Loaded once when the game is
//! constructed, written whenever a session beats it.

use serde::{Deserialize, Serialize};

use crate::persistence::KeyValueStore;

/// Persisted best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "snakeHighScore";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Raise the best score if `score` beats it. Returns true when raised.
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Load the high score, treating missing or malformed values as 0
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(raw)) => match leading_integer(&raw) {
                Some(best) => {
                    log::info!("Loaded high score {}", best);
                    return Self::new(best);
                }
                None => log::warn!("Ignoring malformed high score '{}'", raw),
            },
            Ok(None) => log::info!("No high score found, starting fresh"),
            Err(e) => log::warn!("Could not read high score: {}", e),
        }
        Self::default()
    }

    /// Save the high score
    pub fn save(&self, store: &mut impl KeyValueStore) {
        match store.set(Self::STORAGE_KEY, &self.best.to_string()) {
            Ok(()) => log::info!("High score saved ({})", self.best),
            Err(e) => log::warn!("Could not save high score: {}", e),
        }
    }
}

/// Leading decimal digits of `raw`, so "40abc" reads as 40 like `parseInt`
fn leading_integer(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..end].parse().ok()
}
