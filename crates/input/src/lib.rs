//! Terminal input module.
//!
//! Independent of any UI framework. It maps `crossterm` key events into
//! [`crate::types::GameAction`] and tracks held movement keys so the core can
//! be fed one [`crate::types::FrameInput`] per frame, including on terminals
//! that never report key releases.

pub mod handler;
pub mod map;

pub use stellar_blocks_types as types;

pub use handler::{HeldKey, HeldKeys};
pub use map::{handle_key_event, held_key, should_quit};
