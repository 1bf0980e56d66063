//! Keyboard mapping
//!
//! Arrow keys and WASD steer, Space/Enter starts or restarts.

use serde::{Deserialize, Serialize};

use crate::sim::Direction;

/// A player command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Turn(Direction),
    /// Start from idle, restart after game over
    Confirm,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    let command = match key {
        "ArrowUp" | "w" | "W" => Command::Turn(Direction::Up),
        "ArrowDown" | "s" | "S" => Command::Turn(Direction::Down),
        "ArrowLeft" | "a" | "A" => Command::Turn(Direction::Left),
        "ArrowRight" | "d" | "D" => Command::Turn(Direction::Right),
        " " | "Enter" => Command::Confirm,
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        assert_eq!(command_for_key("ArrowUp"), Some(Command::Turn(Direction::Up)));
        assert_eq!(command_for_key("S"), Some(Command::Turn(Direction::Down)));
        assert_eq!(command_for_key("a"), Some(Command::Turn(Direction::Left)));
        assert_eq!(command_for_key("D"), Some(Command::Turn(Direction::Right)));
        assert_eq!(command_for_key(" "), Some(Command::Confirm));
        assert_eq!(command_for_key("Enter"), Some(Command::Confirm));
        assert_eq!(command_for_key("Escape"), None);
        assert_eq!(command_for_key("x"), None);
    }
}
