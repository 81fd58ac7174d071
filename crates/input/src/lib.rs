//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values. Which
//! keys mean what is host policy; the core only ever sees the logical actions.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
