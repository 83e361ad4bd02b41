use crate::game_state::ActivePiece;
use crate::rng::QueuedPiece;
use crate::types::{Cell, Lifecycle, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, QUEUE_LEN};

/// Read-only copy of everything the presentation layer draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActivePiece>,
    pub queue: [QueuedPiece; QUEUE_LEN],
    pub lifecycle: Lifecycle,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub timer_secs: u32,
    pub fall_speed: u32,
    /// Level shown by the level-up banner while it is visible
    pub banner_level: Option<u32>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn paused(&self) -> bool {
        self.lifecycle == Lifecycle::Paused
    }

    pub fn game_over(&self) -> bool {
        self.lifecycle == Lifecycle::Over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let empty = QueuedPiece {
            kind: PieceKind::I,
            special: false,
        };
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            queue: [empty; QUEUE_LEN],
            lifecycle: Lifecycle::Idle,
            score: 0,
            level: 1,
            lines: 0,
            timer_secs: 0,
            fall_speed: 0,
            banner_level: None,
        }
    }
}
