//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders into
//! a simple framebuffer that is then flushed to the terminal, instead of going
//! through a widget toolkit.
//!
//! - [`GameView`] turns a `GameState` snapshot into a [`FrameBuffer`] (pure)
//! - [`TerminalRenderer`] writes framebuffers to the terminal (I/O)
//! - [`RenderThrottle`] decides when a redraw is worth doing

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{state_label, AnchorY, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
