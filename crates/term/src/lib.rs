//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer. Views draw into a plain
//! framebuffer of styled cells; [`TerminalRenderer`] flushes it to the real
//! terminal, sending only the cells that changed since the last frame.
//!
//! - [`game_view`]: the board, the next-piece column, stats and overlays
//! - [`screens`]: splash, title, name entry, menus, rules, lore, high scores

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screens;

pub use stellar_blocks_core as core;
pub use stellar_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
