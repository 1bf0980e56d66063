//! Idle/demo mode steering
//!
//! Greedy: head for the food, but never into a wall, the body, or a pocket
//! too small to hold the snake.

use std::collections::{HashSet, VecDeque};

use super::state::{Direction, GameState, Position};

/// Pick the next turn for the demo player, `None` if every move is fatal
pub fn choose_direction(state: &GameState) -> Option<Direction> {
    let head = state.head();
    let occupied: HashSet<Position> = state.snake.iter().copied().collect();

    let mut best: Option<(bool, i32, bool, Direction)> = None;
    for direction in Direction::ALL {
        if direction.is_opposite(state.direction) {
            continue;
        }
        let next = head + direction.offset();
        if !state.in_bounds(next) || occupied.contains(&next) {
            continue;
        }

        let roomy = reachable_cells(state, &occupied, next) >= state.snake.len();
        let distance = state
            .food
            .map(|food| (food - next).abs().element_sum())
            .unwrap_or(0);
        let straight = direction == state.direction;

        // Prefer roomy, then close to food, then keeping course
        let key = (roomy, -distance, straight, direction);
        let better = match best {
            None => true,
            Some((r, d, s, _)) => (key.0, key.1, key.2) > (r, d, s),
        };
        if better {
            best = Some(key);
        }
    }

    best.map(|(_, _, _, direction)| direction)
}

/// Free cells reachable from `start` (inclusive), capped at the board size
fn reachable_cells(state: &GameState, occupied: &HashSet<Position>, start: Position) -> usize {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        for direction in Direction::ALL {
            let next = pos + direction.offset();
            if state.in_bounds(next) && !occupied.contains(&next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::tick;

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(Settings::default(), seed, 0);
        state.start();
        state
    }

    #[test]
    fn test_heads_toward_food() {
        let mut state = playing_state(1);
        state.food = Some(Position::new(7, 2));
        assert_eq!(choose_direction(&state), Some(Direction::Up));

        state.food = Some(Position::new(12, 7));
        assert_eq!(choose_direction(&state), Some(Direction::Right));
    }

    #[test]
    fn test_avoids_wall() {
        let mut state = playing_state(1);
        state.snake = [(14, 3), (13, 3), (12, 3)]
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect();
        state.food = Some(Position::new(14, 0));
        assert_eq!(choose_direction(&state), Some(Direction::Up));
    }

    #[test]
    fn test_no_safe_move() {
        let mut state = playing_state(1);
        // Boxed into the top-left corner, heading up
        state.snake = [(0, 0), (0, 1), (1, 1), (1, 0), (2, 0)]
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect();
        state.direction = Direction::Up;
        assert_eq!(choose_direction(&state), None);
    }

    #[test]
    fn test_demo_game_scores() {
        let mut state = playing_state(99);
        for _ in 0..2000 {
            if !state.is_playing() {
                break;
            }
            if let Some(direction) = choose_direction(&state) {
                state.set_direction(direction);
            }
            tick(&mut state);
        }
        assert!(state.score >= 50, "autopilot scored only {}", state.score);
    }
}
