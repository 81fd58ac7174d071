//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules: movement, collision, food placement and
//! scoring. It has **zero dependencies** on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: The same random source produces identical games
//! - **Testable**: Every transition is a plain function over a value
//! - **Portable**: Can run in any host (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: The state value and its four transitions
//! - [`food`]: Row-major food placement over free cells
//! - [`rng`]: Injectable random sources (closures, seeded LCG, replay)
//! - [`error`]: Initialization failure
//!
//! # Game Rules
//!
//! - **Start**: 3 segments centered on the board, heading right
//! - **Turning**: A turn is queued and committed on the next tick; reversing
//!   onto the neck is ignored
//! - **Eating**: Moving onto the food grows the snake by one and scores a point
//! - **Death**: Leaving the board or running into the body ends the game
//! - **Win**: Filling every cell ends the game as a win
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{advance_state, create_initial_state, set_direction, SimpleRng};
//! use tui_snake_types::Direction;
//!
//! let mut rng = SimpleRng::new(12345);
//! let state = create_initial_state(10, 10, &mut rng).unwrap();
//!
//! let state = set_direction(&state, Direction::Down);
//! let state = advance_state(&state, &mut rng);
//!
//! assert_eq!(state.direction, Direction::Down);
//! assert!(!state.is_game_over);
//! ```
//!
//! # Timing
//!
//! The core has no clock. The host calls [`advance_state`] once per tick and
//! applies input transitions in between.

pub mod error;
pub mod food;
pub mod game_state;
pub mod rng;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use error::CoreError;
pub use food::{free_cells, spawn_food};
pub use game_state::{
    advance_state, create_initial_state, set_direction, set_direction_named, toggle_pause,
    GameState,
};
pub use rng::{RandomSource, ReplayRandom, SimpleRng};
