//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 17 rows (indexed 0-16)
//! - **Spawn anchor**: (`BOARD_WIDTH / 2`, 0)
//!
//! # Frame Timing
//!
//! The simulation is frame-driven. Gravity and auto-shift are counted in
//! frames, the level timer in wall-clock milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed frame interval (~60 FPS) |
//! | `BASE_FALL_SPEED` | 60 | Frames per gravity step at level 1 |
//! | `MIN_FALL_SPEED` | 5 | Fastest possible gravity |
//! | `SOFT_DROP_DIVISOR` | 4 | Soft drop adds `speed / 4` frames per frame |
//! | `SHIFT_DELAY_FRAMES` | 10 | Held frames before auto-shift repeats |
//! | `SHIFT_REPEAT_FRAMES` | 4 | Frames between auto-shift repeats |
//! | `LEVEL_TIME_SECS` | 122 | Countdown per level |
//! | `BANNER_MS` | 2000 | Lifetime of the "LEVEL N" banner |
//!
//! # Examples
//!
//! ```
//! use stellar_blocks_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::from_id(3).unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.id(), 3);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 17);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (17 rows)
pub const BOARD_HEIGHT: u8 = 17;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames per gravity step at the start of a session
pub const BASE_FALL_SPEED: u32 = 60;

/// Frames removed from the gravity interval per level
pub const FALL_SPEED_STEP: u32 = 6;

/// Floor of the gravity interval in frames
pub const MIN_FALL_SPEED: u32 = 5;

/// While soft drop is held the gravity counter advances by an extra `speed / 4` per frame
pub const SOFT_DROP_DIVISOR: u32 = 4;

/// Held frames before horizontal auto-shift starts repeating
pub const SHIFT_DELAY_FRAMES: u32 = 10;

/// Frames between auto-shift repeats once the delay has passed
pub const SHIFT_REPEAT_FRAMES: u32 = 4;

/// Seconds on the level countdown
pub const LEVEL_TIME_SECS: u32 = 122;

/// Wall-clock milliseconds per countdown step
pub const TIMER_STEP_MS: u32 = 1000;

/// A level only completes while less than this percentage of the board is filled
pub const LEVEL_FILL_LIMIT_PERCENT: u32 = 99;

/// Chance (in percent) that a queued piece is flagged special
pub const SPECIAL_PIECE_PERCENT: u32 = 20;

/// Number of upcoming pieces in the preview queue
pub const QUEUE_LEN: usize = 3;

/// Points for every locked piece
pub const LOCK_POINTS: u32 = 10;

/// Extra points for locking a special piece
pub const SPECIAL_LOCK_BONUS: u32 = 100;

/// Extra points per cleared row containing a special block
pub const SPECIAL_LINE_BONUS: u32 = 200;

/// Lifetime of the level-up banner in milliseconds
pub const BANNER_MS: u32 = 2000;

/// Number of background music tracks cycled by level
pub const MUSIC_TRACKS: u32 = 8;

/// Maximum entries kept in the high-score table
pub const MAX_HIGH_SCORES: usize = 10;

/// Maximum characters in a player name
pub const MAX_NAME_LEN: usize = 12;

/// Line clear scoring table
///
/// Points for clearing N rows with a single lock:
/// - 1 row: 100
/// - 2 rows: 300
/// - 3 rows: 500
/// - 4 rows: 800
/// - 5 or more rows: 1200 (only reachable with the 5-cell pieces)
pub const LINE_SCORES: [u32; 6] = [0, 100, 300, 500, 800, 1200];

/// The eleven piece kinds
///
/// Ids 1-7 are the classic tetrominoes; 8-11 are five-cell pieces:
/// - **U**: cup
/// - **W**: staircase
/// - **Long**: five-cell bar
/// - **V**: corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
    U,
    W,
    Long,
    V,
}

impl PieceKind {
    /// Every kind, ordered by id.
    pub const ALL: [PieceKind; 11] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::U,
        PieceKind::W,
        PieceKind::Long,
        PieceKind::V,
    ];

    /// Numeric identifier (1-11), also used as the stored board value.
    pub fn id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::L => 4,
            PieceKind::J => 5,
            PieceKind::Z => 6,
            PieceKind::S => 7,
            PieceKind::U => 8,
            PieceKind::W => 9,
            PieceKind::Long => 10,
            PieceKind::V => 11,
        }
    }

    /// Look up a kind by its numeric identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use stellar_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_id(1), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_id(10), Some(PieceKind::Long));
    /// assert_eq!(PieceKind::from_id(0), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1..=11 => Some(Self::ALL[(id - 1) as usize]),
            _ => None,
        }
    }

    /// Short display label
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
            PieceKind::U => "U",
            PieceKind::W => "W",
            PieceKind::Long => "|",
            PieceKind::V => "V",
        }
    }
}

/// Rotation states, indexed 0-3
///
/// The cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation for an index, wrapping modulo 4
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// One step forward (`index + 1 mod 4`)
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// One step back (`index + 3 mod 4`)
    pub fn rotate_ccw(self) -> Self {
        Self::from_index(self.index() + 3)
    }
}

/// A locked block on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub kind: PieceKind,
    /// Locked from a special (bonus) piece
    pub special: bool,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Block)`: Cell filled by a locked piece
pub type Cell = Option<Block>;

/// Discrete game actions
///
/// One-shot actions applied outside the per-frame held input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down
    SoftDrop,
    /// Drop piece to the lowest valid position and lock it
    HardDrop,
    /// Advance the rotation index (with one reverse fallback)
    RotateCw,
    /// Toggle pause
    Pause,
}

/// Held horizontal direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Right,
}

impl Horizontal {
    pub fn dx(self) -> i8 {
        match self {
            Horizontal::Left => -1,
            Horizontal::Right => 1,
        }
    }
}

/// Held input sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub horizontal: Option<Horizontal>,
    pub soft_drop: bool,
}

impl FrameInput {
    pub const IDLE: FrameInput = FrameInput {
        horizontal: None,
        soft_drop: false,
    };
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    Idle,
    Running,
    Paused,
    Over,
}

/// Event emitted by the core for sound and visual triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// The active piece was committed to the board.
    PieceLocked { kind: PieceKind, special: bool },
    /// A lock cleared one or more rows.
    LinesCleared {
        lines: u32,
        special_lines: u32,
        points: u32,
    },
    /// The level timer expired with a playable board.
    LevelUp { level: u32, music_track: u32 },
    /// The session ended.
    GameOver { score: u32, level: u32 },
}
