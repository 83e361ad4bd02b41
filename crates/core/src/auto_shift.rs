//! Frame-counted delayed auto-shift for horizontal movement.
//!
//! A fresh press shifts on its first frame. Holding the same direction then
//! waits `delay` frames before repeating every `repeat` frames. Releasing or
//! switching direction restarts the pattern.

use crate::types::{Horizontal, SHIFT_DELAY_FRAMES, SHIFT_REPEAT_FRAMES};

#[derive(Debug, Clone)]
pub struct AutoShift {
    direction: Option<Horizontal>,
    held_frames: u32,
    repeat_counter: u32,
    delay: u32,
    repeat: u32,
}

impl AutoShift {
    pub fn new() -> Self {
        Self::with_config(SHIFT_DELAY_FRAMES, SHIFT_REPEAT_FRAMES)
    }

    pub fn with_config(delay: u32, repeat: u32) -> Self {
        Self {
            direction: None,
            held_frames: 0,
            repeat_counter: 0,
            delay,
            repeat: repeat.max(1),
        }
    }

    /// Advance one frame with the currently held direction.
    ///
    /// Returns the direction to shift this frame, if any.
    pub fn update(&mut self, held: Option<Horizontal>) -> Option<Horizontal> {
        let Some(dir) = held else {
            self.reset();
            return None;
        };

        if self.direction != Some(dir) {
            self.direction = Some(dir);
            self.held_frames = 1;
            self.repeat_counter = 0;
            return Some(dir);
        }

        self.held_frames = self.held_frames.saturating_add(1);
        if self.held_frames <= self.delay {
            return None;
        }

        self.repeat_counter += 1;
        if self.repeat_counter >= self.repeat {
            self.repeat_counter = 0;
            return Some(dir);
        }
        None
    }

    pub fn reset(&mut self) {
        self.direction = None;
        self.held_frames = 0;
        self.repeat_counter = 0;
    }

    pub fn direction(&self) -> Option<Horizontal> {
        self.direction
    }
}

impl Default for AutoShift {
    fn default() -> Self {
        Self::new()
    }
}
