//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, making them usable
//! from the simulation core, the input layer and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, row 0 is the top)
//! - **Columns**: 10 (indexed 0-9, column 0 is the left)
//!
//! # Timing Constants
//!
//! All intervals are minimum gaps in milliseconds between two applications of
//! the same action:
//!
//! | Constant | Value | Action |
//! |----------|-------|--------|
//! | `HORIZONTAL_INTERVAL_MS` | 100 | move left / right |
//! | `AUTO_DESCENT_INTERVAL_MS` | 500 | automatic descent |
//! | `MANUAL_DESCENT_INTERVAL_MS` | 50 | soft drop |
//! | `ROTATION_INTERVAL_MS` | 250 | rotate |
//! | `DESCENT_TOGGLE_INTERVAL_MS` | 500 | toggle automatic descent |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, InputSignal, ShapeKind, BOARD_COLS, BOARD_ROWS, PALETTE};
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLS, 10);
//!
//! assert_eq!(ShapeKind::from_str("o"), Some(ShapeKind::O));
//! assert_eq!(InputSignal::from_str("rotate"), Some(InputSignal::Rotate));
//!
//! assert_eq!(PALETTE.len(), 8);
//! assert_eq!(Color::Cyan.rgb(), (0, 255, 255));
//! ```

/// Number of board rows
pub const BOARD_ROWS: usize = 20;

/// Number of board columns
pub const BOARD_COLS: usize = 10;

/// Largest row/column count of any catalog shape
pub const MAX_SHAPE_DIM: usize = 3;

/// Minimum gap between horizontal moves
pub const HORIZONTAL_INTERVAL_MS: f64 = 100.0;

/// Minimum gap between automatic descents
pub const AUTO_DESCENT_INTERVAL_MS: f64 = 500.0;

/// Minimum gap between soft-drop steps
pub const MANUAL_DESCENT_INTERVAL_MS: f64 = 50.0;

/// Minimum gap between rotations
pub const ROTATION_INTERVAL_MS: f64 = 250.0;

/// Minimum gap between two toggles of automatic descent
pub const DESCENT_TOGGLE_INTERVAL_MS: f64 = 500.0;

/// Screen width of one board cell in pixels
pub const CELL_WIDTH: i32 = 25;

/// Screen height of one board cell in pixels
pub const CELL_HEIGHT: i32 = 25;

/// Horizontal gap between neighbouring cells in pixels
pub const CELL_SPACING_X: i32 = 1;

/// Vertical gap between neighbouring cells in pixels
pub const CELL_SPACING_Y: i32 = 1;

/// Screen position of the top-left board cell
pub const BOARD_ORIGIN: (i32, i32) = (5, 5);

/// Frame period of the terminal driver (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Held keys are released after this long without a press or repeat event.
pub const KEY_RELEASE_TIMEOUT_MS: f64 = 120.0;


/// The seven catalog shapes
///
/// The classic tetromino names are used, but the set is not the standard one:
/// - **Z**: `110 / 011`
/// - **S**: `011 / 110`
/// - **T**: `111 / 010`
/// - **J**: `01 / 01 / 11`
/// - **L**: `10 / 10 / 11`
/// - **I**: a three cell vertical bar
/// - **O**: 2x2 square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Z,
    S,
    T,
    J,
    L,
    I,
    O,
}

impl ShapeKind {
    /// Catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::I,
        ShapeKind::O,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("i"), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_str("T"), Some(ShapeKind::T));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "z" => Some(ShapeKind::Z),
            "s" => Some(ShapeKind::S),
            "t" => Some(ShapeKind::T),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "i" => Some(ShapeKind::I),
            "o" => Some(ShapeKind::O),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::J => "j",
            ShapeKind::L => "l",
            ShapeKind::I => "i",
            ShapeKind::O => "o",
        }
    }
}

/// Cell colors
///
/// Eight piece colors plus the board background. Values match the named
/// colors of common graphics toolkits so a renderer can map them 1:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Blue,
    BlueViolet,
    Chocolate,
    Cyan,
    DarkBlue,
    Yellow,
    YellowGreen,
    WhiteSmoke,
}

/// Colors a spawned piece may receive
pub const PALETTE: [Color; 8] = [
    Color::Black,
    Color::Blue,
    Color::BlueViolet,
    Color::Chocolate,
    Color::Cyan,
    Color::DarkBlue,
    Color::Yellow,
    Color::YellowGreen,
];

/// Color of an empty board cell
pub const BACKGROUND: Color = Color::WhiteSmoke;

impl Color {
    /// 24-bit RGB triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::BlueViolet => (138, 43, 226),
            Color::Chocolate => (210, 105, 30),
            Color::Cyan => (0, 255, 255),
            Color::DarkBlue => (0, 0, 139),
            Color::Yellow => (255, 255, 0),
            Color::YellowGreen => (154, 205, 50),
            Color::WhiteSmoke => (245, 245, 245),
        }
    }
}

/// Boolean key-down signals polled once per tick
///
/// These are produced by whatever input source drives the game; the core only
/// ever sees pressed / not pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSignal {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Drop the piece one row
    SoftDrop,
    /// Rotate the piece 90°
    Rotate,
    /// Switch automatic descent on or off
    ToggleAutoDescend,
    /// Leave the waiting screen and start a game
    StartNewGame,
    /// Ask the driver to exit
    Quit,
}

impl InputSignal {
    pub const ALL: [InputSignal; 7] = [
        InputSignal::MoveLeft,
        InputSignal::MoveRight,
        InputSignal::SoftDrop,
        InputSignal::Rotate,
        InputSignal::ToggleAutoDescend,
        InputSignal::StartNewGame,
        InputSignal::Quit,
    ];

    /// Parse signal from its camelCase name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(InputSignal::MoveLeft),
            "moveright" => Some(InputSignal::MoveRight),
            "softdrop" => Some(InputSignal::SoftDrop),
            "rotate" => Some(InputSignal::Rotate),
            "toggleautodescend" => Some(InputSignal::ToggleAutoDescend),
            "startnewgame" => Some(InputSignal::StartNewGame),
            "quit" => Some(InputSignal::Quit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputSignal::MoveLeft => "moveLeft",
            InputSignal::MoveRight => "moveRight",
            InputSignal::SoftDrop => "softDrop",
            InputSignal::Rotate => "rotate",
            InputSignal::ToggleAutoDescend => "toggleAutoDescend",
            InputSignal::StartNewGame => "startNewGame",
            InputSignal::Quit => "quit",
        }
    }

    fn index(&self) -> usize {
        match self {
            InputSignal::MoveLeft => 0,
            InputSignal::MoveRight => 1,
            InputSignal::SoftDrop => 2,
            InputSignal::Rotate => 3,
            InputSignal::ToggleAutoDescend => 4,
            InputSignal::StartNewGame => 5,
            InputSignal::Quit => 6,
        }
    }
}

/// Snapshot of every input signal for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSignals {
    pressed: [bool; 7],
}

impl InputSignals {
    /// Build a snapshot with exactly the given signals pressed
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{InputSignal, InputSignals};
    ///
    /// let signals = InputSignals::pressed(&[InputSignal::MoveLeft, InputSignal::Rotate]);
    /// assert!(signals.is_pressed(InputSignal::MoveLeft));
    /// assert!(!signals.is_pressed(InputSignal::MoveRight));
    /// ```
    pub fn pressed(signals: &[InputSignal]) -> Self {
        let mut out = Self::default();
        for &signal in signals {
            out.set(signal, true);
        }
        out
    }

    pub fn set(&mut self, signal: InputSignal, pressed: bool) {
        self.pressed[signal.index()] = pressed;
    }

    pub fn is_pressed(&self, signal: InputSignal) -> bool {
        self.pressed[signal.index()]
    }

    pub fn any(&self) -> bool {
        self.pressed.iter().any(|&p| p)
    }
}

/// Game phases
///
/// The loop `AwaitingNewGame -> PreparingNewGame -> Playing -> AwaitingNewGame`
/// runs for the lifetime of the process. `Paused` and `GameOver` are named for
/// completeness; the tick never enters them (a blocked spawn goes straight back
/// to `AwaitingNewGame`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    AwaitingNewGame,
    PreparingNewGame,
    Playing,
    Paused,
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::AwaitingNewGame => "awaitingNewGame",
            GamePhase::PreparingNewGame => "preparingNewGame",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}
