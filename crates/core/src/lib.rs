//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, files or clocks:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any front-end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x17 grid with collision checks and line clearing
//! - [`pieces`]: Shape catalog for the seven classic and four large pieces
//! - [`rng`]: Seeded generator and the three-entry preview queue
//! - [`auto_shift`]: Delayed auto-shift for held horizontal input
//! - [`scoring`]: Lock points, line table, special bonuses and the level curve
//! - [`game_state`]: The session state machine
//! - [`high_scores`]: Ten-entry high-score table
//! - [`snapshot`]: Copyable view of a session for rendering
//!
//! # Game Rules
//!
//! - Pieces spawn at column 5 of the top row. One in five is *special*.
//! - Rotation tries the next orientation, then the previous one, without kicks.
//! - Each level lasts 122 seconds of play. When the timer runs out the level
//!   completes if the board is less than 99% full, otherwise the game ends.
//! - Gravity starts at one row per 60 frames and speeds up each level.
//!
//! # Example
//!
//! ```
//! use stellar_blocks_core::GameState;
//! use stellar_blocks_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start_session();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Every lock is worth at least 10 points.
//! assert!(game.score() >= 10);
//! ```
//!
//! # Timing
//!
//! [`GameState::tick`](game_state::GameState::tick) is one frame (about 16 ms).
//! Gravity and auto-shift count frames; the level timer and the level-up
//! banner count the elapsed milliseconds passed in.

pub mod auto_shift;
pub mod board;
pub mod game_state;
pub mod high_scores;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use stellar_blocks_types as types;

// Re-export commonly used types for convenience
pub use auto_shift::AutoShift;
pub use board::{Board, LineClear};
pub use game_state::{ActivePiece, Banner, EventBuffer, GameState};
pub use high_scores::{HighScoreEntry, HighScoreTable};
pub use pieces::{get_shape, try_rotate};
pub use rng::{PieceQueue, QueuedPiece, SimpleRng};
pub use scoring::{calculate_score, fall_speed_for_level, ScoreResult};
pub use snapshot::GameSnapshot;
