//! TUI Snake (workspace facade crate).
//!
//! Re-exports the workspace crates under `tui_snake::{core,input,term,types}` and
//! hosts the startup configuration used by the binary.

pub mod config;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
