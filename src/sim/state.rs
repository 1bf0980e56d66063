//! Game state and core simulation types
//!
//! Everything the presentation layer reads each frame lives here.

use std::collections::VecDeque;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::place_food;
use crate::consts::INITIAL_SNAKE_LENGTH;
use crate::settings::Settings;

/// A grid cell, (0, 0) is the top-left corner
pub type Position = IVec2;

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step on the grid (y grows downward)
    pub fn offset(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start command
    Idle,
    /// Ticking
    Playing,
    /// Session ended, waiting for a restart
    GameOver,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfCollision,
    /// No free cell left for food
    BoardFilled,
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    FoodEaten { score: u64 },
    NewHighScore { score: u64 },
    SpeedChanged { speed_ms: u32 },
    GameOver { reason: GameOverReason },
}

/// Read-only view polled by the presentation layer once per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid_size: i32,
    /// Head first
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: u64,
    pub high_score: u64,
    pub speed_ms: u32,
    pub is_playing: bool,
    pub game_over: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Rules for this session
    pub settings: Settings,
    /// Seed the RNG was created from
    pub seed: u64,
    pub(super) rng: Pcg32,
    /// Head first; pairwise distinct while alive
    pub snake: VecDeque<Position>,
    /// `None` only once the board is full
    pub food: Option<Position>,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Direction the next tick will apply
    pub pending_direction: Direction,
    pub score: u64,
    /// Best score seen, carried across restarts
    pub high_score: u64,
    /// Current tick period (ms)
    pub speed_ms: u32,
    pub phase: GamePhase,
    /// Ticks since the session started
    pub time_ticks: u64,
}

impl GameState {
    /// Create an idle session
    pub fn new(settings: Settings, seed: u64, high_score: u64) -> Self {
        let settings = settings.validated();
        let mut state = Self {
            speed_ms: settings.initial_speed_ms,
            settings,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            snake: VecDeque::new(),
            food: None,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            high_score,
            phase: GamePhase::Idle,
            time_ticks: 0,
        };
        state.respawn();
        state
    }

    /// Horizontal snake facing right, head at the board center
    pub fn initial_snake(grid_size: i32) -> VecDeque<Position> {
        let center = grid_size / 2;
        (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| Position::new(center - i, center))
            .collect()
    }

    /// Put every per-session field back to its starting value
    fn respawn(&mut self) {
        self.snake = Self::initial_snake(self.settings.grid_size);
        self.food = place_food(&mut self.rng, self.settings.grid_size, &self.snake);
        self.direction = Direction::Right;
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.speed_ms = self.settings.initial_speed_ms;
        self.time_ticks = 0;
    }

    /// Begin a fresh session (from any phase)
    pub fn start(&mut self) {
        self.respawn();
        self.phase = GamePhase::Playing;
        log::info!("Session started (speed {}ms)", self.speed_ms);
    }

    /// Same as `start`; used after game over
    pub fn reset(&mut self) {
        self.start();
    }

    /// Queue a turn for the next tick. Reversals and turns outside
    /// `Playing` are ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.phase != GamePhase::Playing || direction.is_opposite(self.direction) {
            return;
        }
        self.pending_direction = direction;
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        let size = self.settings.grid_size;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.snake.contains(&pos)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid_size: self.settings.grid_size,
            snake: self.snake.iter().copied().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            high_score: self.high_score,
            speed_ms: self.speed_ms,
            is_playing: self.is_playing(),
            game_over: self.is_game_over(),
        }
    }
}
