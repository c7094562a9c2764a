//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the grid model, the shape catalog, the movement,
//! rotation and collision rules, line clearing, and the phase machine that
//! turns input signals into piece operations. It has **no dependencies** on a
//! terminal, a window or a clock:
//!
//! - **Deterministic**: the random source is injected; same seed, same game
//! - **Testable**: every rule is a plain function over `&mut Board`
//! - **Portable**: the caller supplies time in milliseconds and reads a
//!   [`GameSnapshot`] back
//!
//! # Module Structure
//!
//! - [`geometry`]: screen rectangles carried by every board cell
//! - [`board`]: 20x10 grid of occupancy + color, row clearing and compaction
//! - [`catalog`]: shape matrices, rotation and the seven-shape catalog
//! - [`piece`]: the active piece (spawn, collide, move, rotate)
//! - [`rng`]: injectable random sources
//! - [`timing`]: per-action rate-limit gates
//! - [`game_state`]: the phase machine
//! - [`snapshot`]: plain-data view for renderers
//!
//! # Game Rules
//!
//! - The active piece is committed to the board after every operation; moves
//!   are erase → shift → collide → commit (or revert and recommit)
//! - A piece that cannot move down is left where it is and the next piece is
//!   spawned; completed rows are cleared during that spawn
//! - A spawn that collides sends the game back to waiting for a new game
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_core::types::{GamePhase, InputSignal, InputSignals};
//!
//! let mut game = GameState::new(12345);
//! let start = InputSignals::pressed(&[InputSignal::StartNewGame]);
//!
//! game.tick(0.0, &start);
//! assert_eq!(game.tick(16.0, &InputSignals::default()), GamePhase::Playing);
//!
//! // Auto-descent moves the piece once more than 500ms have passed.
//! let row = game.active().unwrap().row();
//! game.tick(600.0, &InputSignals::default());
//! assert_eq!(game.active().unwrap().row(), row + 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`] every frame with a monotonic timestamp. The
//! intervals live in [`Timings`]; see [`timing`] for the gate semantics.

pub mod board;
pub mod catalog;
pub mod game_state;
pub mod geometry;
pub mod piece;
pub mod rng;
pub mod snapshot;
pub mod timing;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardCell, BoardLayout};
pub use catalog::{Shape, ShapeCatalog};
pub use game_state::GameState;
pub use geometry::{GeometryError, Point, Rect};
pub use piece::{collides, ActivePiece, Descent, Spawn, SpawnOutcome};
pub use rng::{RandomSource, RngSource, ScriptedSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, CellView, GameSnapshot};
pub use timing::{Gate, Gates, Timings};
