//! Error type for the game state core.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The board cannot seat the initial snake.
    #[error("invalid board dimensions {width}x{height}: need at least {min_width}x{min_height}")]
    InvalidDimensions {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}
