//! RNG module - preview queue generation
//!
//! The preview queue always holds the next three pieces. Each entry gets a
//! uniformly random kind and, independently, a 20% chance of being special.
//!
//! A small seeded LCG drives everything so a given seed replays the same game.

use crate::types::{PieceKind, QUEUE_LEN, SPECIAL_PIECE_PERCENT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of an LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// An entry in the preview queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueuedPiece {
    pub kind: PieceKind,
    pub special: bool,
}

/// Fixed-length FIFO of upcoming pieces
#[derive(Debug, Clone)]
pub struct PieceQueue {
    entries: [QueuedPiece; QUEUE_LEN],
    rng: SimpleRng,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let entries = std::array::from_fn(|_| Self::roll(&mut rng));
        Self { entries, rng }
    }

    fn roll(rng: &mut SimpleRng) -> QueuedPiece {
        let kind = PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let special = rng.next_range(100) < SPECIAL_PIECE_PERCENT;
        QueuedPiece { kind, special }
    }

    /// Peek at the next piece without removing it
    pub fn peek(&self) -> QueuedPiece {
        self.entries[0]
    }

    /// All upcoming pieces, next first
    pub fn entries(&self) -> &[QueuedPiece; QUEUE_LEN] {
        &self.entries
    }

    /// Pop the front entry and append a fresh one
    pub fn advance(&mut self) -> QueuedPiece {
        let front = self.entries[0];
        self.entries.rotate_left(1);
        self.entries[QUEUE_LEN - 1] = Self::roll(&mut self.rng);
        front
    }

    /// Replace every entry with fresh rolls (new session)
    pub fn refill(&mut self) {
        for slot in &mut self.entries {
            *slot = Self::roll(&mut self.rng);
        }
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}
