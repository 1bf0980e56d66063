//! Fixed period simulation tick
//!
//! Advances the snake one cell. The caller owns the timer; the period to use
//! is `GameState::speed_ms`, which may change on any tick that eats food.

use super::food::place_food;
use super::state::{GameEvent, GameOverReason, GamePhase, GameState, Position};
use crate::consts::{FOOD_SCORE, MIN_SPEED_MS, SPEED_STEP_MS};

/// Advance the game state by one step. No-op unless playing.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Turns are buffered; a tick applies exactly one direction
    state.direction = state.pending_direction;
    let new_head = state.head() + state.direction.offset();

    if let Some(reason) = check_collision(state, new_head) {
        end_session(state, reason, &mut events);
        return events;
    }

    state.snake.push_front(new_head);

    if state.food == Some(new_head) {
        let consumption = Consumption::compute(state);
        consumption.apply(state, &mut events);
    } else {
        state.snake.pop_back();
    }

    events
}

/// Period after one more food at `speed_ms`, never below the floor
pub fn next_speed(speed_ms: u32) -> u32 {
    speed_ms.saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS)
}

/// Check if the new head position ends the session
fn check_collision(state: &GameState, pos: Position) -> Option<GameOverReason> {
    if !state.in_bounds(pos) {
        return Some(GameOverReason::Wall);
    }

    // The tail has not moved yet, so it counts as occupied
    if state.occupies(pos) {
        return Some(GameOverReason::SelfCollision);
    }

    None
}

fn end_session(state: &mut GameState, reason: GameOverReason, events: &mut Vec<GameEvent>) {
    state.phase = GamePhase::GameOver;
    events.push(GameEvent::GameOver { reason });
    log::info!(
        "Game over ({:?}) score={} length={} ticks={}",
        reason,
        state.score,
        state.snake.len(),
        state.time_ticks
    );
}

/// Everything that changes when food is eaten, derived together from the
/// pre-tick values and applied in one go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Consumption {
    score: u64,
    high_score: u64,
    speed_ms: u32,
    food: Option<Position>,
}

impl Consumption {
    /// Expects the new head to already be on the snake
    fn compute(state: &mut GameState) -> Self {
        let score = state.score + FOOD_SCORE;
        Self {
            score,
            high_score: state.high_score.max(score),
            speed_ms: next_speed(state.speed_ms),
            food: place_food(&mut state.rng, state.settings.grid_size, &state.snake),
        }
    }

    fn apply(self, state: &mut GameState, events: &mut Vec<GameEvent>) {
        let raised_high = self.high_score > state.high_score;
        let sped_up = self.speed_ms != state.speed_ms;

        state.score = self.score;
        state.high_score = self.high_score;
        state.speed_ms = self.speed_ms;
        state.food = self.food;

        events.push(GameEvent::FoodEaten { score: self.score });
        if raised_high {
            events.push(GameEvent::NewHighScore { score: self.high_score });
        }
        if sped_up {
            events.push(GameEvent::SpeedChanged {
                speed_ms: self.speed_ms,
            });
        }
        log::debug!(
            "Food eaten: score={} speed={}ms length={}",
            self.score,
            self.speed_ms,
            state.snake.len()
        );

        if self.food.is_none() {
            end_session(state, GameOverReason::BoardFilled, events);
        }
    }
}
