//! Terminal "game renderer" module.
//!
//! Renders a [`core::GameSnapshot`] into a simple framebuffer that is then
//! diff-flushed to the terminal. No widget toolkit is involved.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot → framebuffer (board at 2 columns per cell, side
//!   panel, start prompt)
//! - [`renderer`]: crossterm output with changed-run diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
