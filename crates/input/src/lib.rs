//! Terminal input module (game-facing).
//!
//! Maps `crossterm` key events into [`crate::types::InputSignal`] and keeps
//! track of held keys so the game can poll boolean key-down signals once per
//! tick (including on terminals without key-release events).

pub mod handler;
pub mod map;

pub use blockfall_types as types;

pub use handler::KeyboardState;
pub use map::{map_key, should_quit};
