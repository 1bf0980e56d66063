//! Game controller
//!
//! Binds a simulation session to the storage that keeps the high score, and
//! exposes the handful of commands the presentation layer may issue.

use crate::highscore::HighScore;
use crate::input::Command;
use crate::persistence::KeyValueStore;
use crate::settings::Settings;
use crate::sim::{self, Direction, GameEvent, GamePhase, GameState, Snapshot};

/// A playable game backed by a key-value store
pub struct SnakeGame<S: KeyValueStore> {
    state: GameState,
    high_score: HighScore,
    store: S,
    /// Demo mode, the autopilot steers before every tick
    autopilot: bool,
}

impl<S: KeyValueStore> SnakeGame<S> {
    /// Create an idle game, loading the high score from `store`
    pub fn new(settings: Settings, store: S, seed: u64) -> Self {
        let high_score = HighScore::load(&store);
        Self {
            state: GameState::new(settings, seed, high_score.best),
            high_score,
            store,
            autopilot: false,
        }
    }

    pub fn start(&mut self) {
        self.state.start();
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.state.set_direction(direction);
    }

    /// Space/Enter: start from idle, restart after game over
    pub fn confirm(&mut self) {
        match self.state.phase {
            GamePhase::Idle => self.start(),
            GamePhase::GameOver => self.reset(),
            GamePhase::Playing => {}
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Turn(direction) => self.set_direction(direction),
            Command::Confirm => self.confirm(),
        }
    }

    /// Advance one step, persisting a new high score as soon as it happens
    pub fn tick(&mut self) -> Vec<GameEvent> {
        if self.autopilot && self.state.is_playing() {
            if let Some(direction) = sim::choose_direction(&self.state) {
                self.state.set_direction(direction);
            }
        }

        let events = sim::tick(&mut self.state);
        for event in &events {
            if let GameEvent::NewHighScore { score } = *event {
                if self.high_score.submit(score) {
                    self.high_score.save(&mut self.store);
                }
            }
        }
        events
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
        log::info!("Autopilot: {}", enabled);
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::sim::Position;

    fn eat_once(game: &mut SnakeGame<MemoryStore>) -> Vec<GameEvent> {
        game.state.snake = [(7, 7), (6, 7), (5, 7)]
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect();
        game.state.direction = Direction::Right;
        game.state.pending_direction = Direction::Right;
        game.state.food = Some(Position::new(8, 7));
        game.tick()
    }

    #[test]
    fn test_loads_high_score_on_construction() {
        let store = MemoryStore::with_entry(HighScore::STORAGE_KEY, "30");
        let game = SnakeGame::new(Settings::default(), store, 1);
        assert_eq!(game.high_score(), 30);
        assert_eq!(game.snapshot().high_score, 30);
        assert!(!game.snapshot().is_playing);
    }

    #[test]
    fn test_new_high_score_is_persisted_and_survives_reset() {
        let store = MemoryStore::with_entry(HighScore::STORAGE_KEY, "30");
        let mut game = SnakeGame::new(Settings::default(), store, 1);
        game.start();

        for _ in 0..3 {
            eat_once(&mut game);
        }
        assert_eq!(game.high_score(), 30);
        assert_eq!(game.store().get(HighScore::STORAGE_KEY), Ok(Some("30".to_string())));

        eat_once(&mut game);
        assert_eq!(game.snapshot().score, 40);
        assert_eq!(game.high_score(), 40);
        assert_eq!(game.store().get(HighScore::STORAGE_KEY), Ok(Some("40".to_string())));

        game.reset();
        assert_eq!(game.snapshot().score, 0);
        assert_eq!(game.snapshot().high_score, 40);
        assert_eq!(game.high_score(), 40);
    }

    #[test]
    fn test_confirm_follows_lifecycle() {
        let mut game = SnakeGame::new(Settings::default(), MemoryStore::new(), 5);
        assert_eq!(game.state().phase, GamePhase::Idle);

        game.apply(Command::Confirm);
        assert_eq!(game.state().phase, GamePhase::Playing);

        // Confirm while playing does not restart
        game.tick();
        let ticks = game.state().time_ticks;
        game.confirm();
        assert_eq!(game.state().time_ticks, ticks);

        // Run into the right wall
        while game.state().is_playing() {
            game.tick();
        }
        assert_eq!(game.state().phase, GamePhase::GameOver);

        game.apply(Command::Confirm);
        assert_eq!(game.state().phase, GamePhase::Playing);
        assert_eq!(game.state().snake.len(), 3);
    }

    #[test]
    fn test_turn_command_reaches_state() {
        let mut game = SnakeGame::new(Settings::default(), MemoryStore::new(), 5);
        game.start();
        game.apply(Command::Turn(Direction::Up));
        assert_eq!(game.state().pending_direction, Direction::Up);

        // Still travelling right
        game.apply(Command::Turn(Direction::Left));
        assert_eq!(game.state().pending_direction, Direction::Up);

        game.tick();
        assert_eq!(game.state().direction, Direction::Up);
        game.apply(Command::Turn(Direction::Left));
        game.tick();
        assert_eq!(game.state().direction, Direction::Left);
    }

    #[test]
    fn test_autopilot_steers() {
        let mut game = SnakeGame::new(Settings::default(), MemoryStore::new(), 11);
        game.set_autopilot(true);
        game.start();
        for _ in 0..200 {
            game.tick();
        }
        assert!(game.snapshot().score > 0);
        assert!(game.autopilot());
    }
}
