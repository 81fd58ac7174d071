//! Game state module - the complete snake game state and its transitions
//!
//! Every transition borrows the previous state and returns a new one; nothing
//! is mutated in place. The host owns the single "current state" binding and
//! replaces it after each call.

use crate::error::CoreError;
use crate::food::spawn_food;
use crate::rng::RandomSource;
use crate::types::{
    Direction, GameAction, Point, INITIAL_SNAKE_LEN, MIN_GRID_HEIGHT, MIN_GRID_WIDTH,
};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub grid_width: u16,
    pub grid_height: u16,
    /// Head first, tail last.
    pub snake: Vec<Point>,
    pub direction: Direction,
    /// Heading committed on the next tick.
    pub next_direction: Direction,
    /// `None` once the snake covers the whole board.
    pub food: Option<Point>,
    pub score: u32,
    pub is_game_over: bool,
    pub is_paused: bool,
    /// Set together with `is_game_over` when the board is full.
    pub is_won: bool,
}

/// Create a fresh game: a 3-segment snake centered on the board, heading right.
pub fn create_initial_state<R>(width: u16, height: u16, rng: &mut R) -> Result<GameState, CoreError>
where
    R: RandomSource + ?Sized,
{
    if width < MIN_GRID_WIDTH || height < MIN_GRID_HEIGHT {
        return Err(CoreError::InvalidDimensions {
            width,
            height,
            min_width: MIN_GRID_WIDTH,
            min_height: MIN_GRID_HEIGHT,
        });
    }

    // On narrow boards the center column would push the tail off the left edge.
    let head_x = ((width / 2) as i32).max(INITIAL_SNAKE_LEN as i32 - 1);
    let head_y = (height / 2) as i32;
    let snake: Vec<Point> = (0..INITIAL_SNAKE_LEN as i32)
        .map(|i| Point::new(head_x - i, head_y))
        .collect();

    let food = spawn_food(&snake, width, height, rng);
    let board_full = food.is_none();

    Ok(GameState {
        grid_width: width,
        grid_height: height,
        snake,
        direction: Direction::Right,
        next_direction: Direction::Right,
        food,
        score: 0,
        is_game_over: board_full,
        is_paused: false,
        is_won: board_full,
    })
}

/// Queue a heading for the next tick.
///
/// A reversal of the current heading is dropped, not queued.
pub fn set_direction(state: &GameState, requested: Direction) -> GameState {
    if state.direction.is_opposite(requested) {
        return state.clone();
    }
    GameState {
        next_direction: requested,
        ..state.clone()
    }
}

/// Queue a heading given by name; unknown names leave the state unchanged.
pub fn set_direction_named(state: &GameState, requested: &str) -> GameState {
    match Direction::from_str(requested) {
        Some(direction) => set_direction(state, direction),
        None => state.clone(),
    }
}

/// Flip the pause flag. A finished game cannot be paused.
pub fn toggle_pause(state: &GameState) -> GameState {
    if state.is_game_over {
        return state.clone();
    }
    GameState {
        is_paused: !state.is_paused,
        ..state.clone()
    }
}

/// One tick of movement.
pub fn advance_state<R>(state: &GameState, rng: &mut R) -> GameState
where
    R: RandomSource + ?Sized,
{
    if state.is_game_over || state.is_paused {
        return state.clone();
    }

    let direction = state.next_direction;
    let next_head = state.head().step(direction);

    if !next_head.in_bounds(state.grid_width, state.grid_height) {
        return GameState {
            direction,
            is_game_over: true,
            ..state.clone()
        };
    }

    let will_eat = state.food == Some(next_head);
    let mut snake = Vec::with_capacity(state.snake.len() + 1);
    snake.push(next_head);
    snake.extend_from_slice(&state.snake);
    if !will_eat {
        snake.pop();
    }

    if snake[1..].contains(&next_head) {
        return GameState {
            direction,
            snake,
            is_game_over: true,
            ..state.clone()
        };
    }

    if !will_eat {
        return GameState {
            direction,
            snake,
            ..state.clone()
        };
    }

    let food = spawn_food(&snake, state.grid_width, state.grid_height, rng);
    let board_full = food.is_none();
    GameState {
        direction,
        snake,
        food,
        score: state.score + 1,
        is_game_over: board_full,
        is_won: board_full,
        ..state.clone()
    }
}

impl GameState {
    /// Start a new game. See [`create_initial_state`].
    pub fn new<R>(width: u16, height: u16, rng: &mut R) -> Result<Self, CoreError>
    where
        R: RandomSource + ?Sized,
    {
        create_initial_state(width, height, rng)
    }

    pub fn head(&self) -> Point {
        self.snake[0]
    }

    pub fn tail(&self) -> Point {
        self.snake[self.snake.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn occupies(&self, p: Point) -> bool {
        self.snake.contains(&p)
    }

    /// Neither paused nor over.
    pub fn is_running(&self) -> bool {
        !self.is_game_over && !self.is_paused
    }

    pub fn set_direction(&self, requested: Direction) -> Self {
        set_direction(self, requested)
    }

    pub fn toggle_pause(&self) -> Self {
        toggle_pause(self)
    }

    pub fn advance<R>(&self, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        advance_state(self, rng)
    }

    /// Apply an input action.
    ///
    /// `Restart` builds a fresh game on the same board; the dimensions were
    /// already validated, so it cannot fail.
    pub fn apply_action<R>(&self, action: GameAction, rng: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        match action {
            GameAction::Turn(direction) => set_direction(self, direction),
            GameAction::Pause => toggle_pause(self),
            GameAction::Restart => create_initial_state(self.grid_width, self.grid_height, rng)
                .unwrap_or_else(|_| self.clone()),
        }
    }

    /// FNV-1a 64-bit hash of everything a renderer can see.
    ///
    /// Equal states always hash equal; the host uses this to skip redundant
    /// redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a::new();
        h.write_u32(self.grid_width as u32);
        h.write_u32(self.grid_height as u32);
        h.write_u32(self.snake.len() as u32);
        for p in &self.snake {
            h.write_i32(p.x);
            h.write_i32(p.y);
        }
        match self.food {
            Some(p) => {
                h.write_u8(1);
                h.write_i32(p.x);
                h.write_i32(p.y);
            }
            None => h.write_u8(0),
        }
        h.write_u8(self.direction as u8);
        h.write_u8(self.next_direction as u8);
        h.write_u32(self.score);
        h.write_u8(self.is_game_over as u8);
        h.write_u8(self.is_paused as u8);
        h.write_u8(self.is_won as u8);
        h.finish()
    }
}

struct Fnv1a(u64);

impl Fnv1a {
    fn new() -> Self {
        Self(0xcbf29ce484222325)
    }

    fn write_u8(&mut self, b: u8) {
        self.0 ^= b as u64;
        self.0 = self.0.wrapping_mul(0x00000100000001B3);
    }

    fn write_u32(&mut self, v: u32) {
        for b in v.to_le_bytes() {
            self.write_u8(b);
        }
    }

    fn write_i32(&mut self, v: i32) {
        self.write_u32(v as u32);
    }

    fn finish(&self) -> u64 {
        self.0
    }
}
