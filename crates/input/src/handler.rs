//! Held-key tracking for terminal environments.
//!
//! The core wants to know, once per frame, which horizontal direction is held
//! and whether soft drop is held. Terminals report presses reliably but many
//! never report releases, so a held key is dropped after a timeout unless a
//! fresh press or auto-repeat refreshes it.

use crossterm::event::KeyCode;

use crate::map::held_key;
use crate::types::{FrameInput, Horizontal};

/// A key that acts while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldKey {
    Left,
    Right,
    Down,
}

// Without release events a single tap must not turn into a long hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held movement keys and produces one [`FrameInput`] per frame.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    horizontal: Option<Horizontal>,
    soft_drop: bool,
    /// Time since the last press or repeat of a held key.
    idle_ms: u32,
    /// A release arrived before any frame saw the press.
    release_pending: bool,
    seen_by_frame: bool,
    key_release_timeout_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            horizontal: None,
            soft_drop: false,
            idle_ms: 0,
            release_pending: false,
            seen_by_frame: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press (or terminal auto-repeat). Returns false for keys that
    /// are not held keys.
    pub fn handle_key_press(&mut self, code: KeyCode) -> bool {
        let Some(key) = held_key(code) else {
            return false;
        };

        self.idle_ms = 0;
        self.release_pending = false;
        match key {
            HeldKey::Left => self.set_horizontal(Horizontal::Left),
            HeldKey::Right => self.set_horizontal(Horizontal::Right),
            HeldKey::Down => self.soft_drop = true,
        }
        true
    }

    fn set_horizontal(&mut self, dir: Horizontal) {
        if self.horizontal != Some(dir) {
            self.horizontal = Some(dir);
            self.seen_by_frame = false;
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match held_key(code) {
            Some(HeldKey::Left) if self.horizontal == Some(Horizontal::Left) => {
                self.release_horizontal()
            }
            Some(HeldKey::Right) if self.horizontal == Some(Horizontal::Right) => {
                self.release_horizontal()
            }
            Some(HeldKey::Down) => self.soft_drop = false,
            _ => {}
        }
    }

    fn release_horizontal(&mut self) {
        if self.seen_by_frame {
            self.horizontal = None;
        } else {
            // Keep a quick tap alive for exactly one frame.
            self.release_pending = true;
        }
    }

    /// Advance one frame and report what is held.
    pub fn frame(&mut self, elapsed_ms: u32) -> FrameInput {
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > self.key_release_timeout_ms && !self.release_pending {
            self.horizontal = None;
            self.soft_drop = false;
        }

        let input = FrameInput {
            horizontal: self.horizontal,
            soft_drop: self.soft_drop,
        };

        self.seen_by_frame = true;
        if self.release_pending {
            self.release_pending = false;
            self.horizontal = None;
        }
        input
    }

    pub fn reset(&mut self) {
        self.horizontal = None;
        self.soft_drop = false;
        self.idle_ms = 0;
        self.release_pending = false;
        self.seen_by_frame = false;
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
