//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The default playfield is a 20x20 grid. Any board of at least
//! [`MIN_GRID_WIDTH`] x [`MIN_GRID_HEIGHT`] cells can seat the initial snake.
//! The host caps configured boards at [`MAX_GRID_WIDTH`] x [`MAX_GRID_HEIGHT`].
//!
//! # Coordinates
//!
//! `x` grows to the right, `y` grows downwards, `(0, 0)` is the top-left cell.
//! Coordinates are signed so a head that steps off the board is still
//! representable before the collision check rejects it.
//!
//! # Game Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 120 | Fixed movement interval |
//! | `STATIC_RENDER_INTERVAL_MS` | 250 | Redraw cadence while nothing moves |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Point};
//!
//! let heading = Direction::from_str("up").unwrap();
//! assert_eq!(heading, Direction::Up);
//! assert_eq!(heading.opposite(), Direction::Down);
//!
//! let head = Point::new(5, 5);
//! assert_eq!(head.step(Direction::Right), Point::new(6, 5));
//! ```

/// Default board width in cells
pub const DEFAULT_GRID_WIDTH: u16 = 20;

/// Default board height in cells
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Smallest board width that can seat the initial snake
pub const MIN_GRID_WIDTH: u16 = 3;

/// Smallest board height that can seat the initial snake
pub const MIN_GRID_HEIGHT: u16 = 1;

/// Largest board width the host accepts
pub const MAX_GRID_WIDTH: u16 = 512;

/// Largest board height the host accepts
pub const MAX_GRID_HEIGHT: u16 = 512;

/// Number of segments of a freshly created snake
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Fixed movement interval in milliseconds
pub const TICK_MS: u32 = 120;

/// Lower bound for a configured tick interval
pub const MIN_TICK_MS: u32 = 10;

/// Redraw interval while the game is paused or over
pub const STATIC_RENDER_INTERVAL_MS: u32 = 250;

/// Axis-aligned heading of the snake
///
/// - **Up**: towards row 0
/// - **Down**: towards the last row
/// - **Left**: towards column 0
/// - **Right**: towards the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four headings, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Cell offset for one step in this direction
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.unit_vector(), (0, -1));
    /// assert_eq!(Direction::Right.unit_vector(), (1, 0));
    /// ```
    pub fn unit_vector(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The heading pointing the other way
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse a heading from its exact lowercase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("RIGHT"), None);
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A cell coordinate on (or just off) the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step towards `direction`
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.unit_vector();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Check whether the point lies inside a `width` x `height` board
    pub fn in_bounds(&self, width: u16, height: u16) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width as i32 && self.y < height as i32
    }
}

/// Game actions produced by the input layer
///
/// Each action maps to one core transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Queue a heading for the next tick
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Start a fresh game with the same board size
    Restart,
}
