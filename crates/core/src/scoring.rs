//! Scoring module - points and the level curve
//!
//! - Every lock scores a flat 10, plus 100 for a special piece.
//! - Line clears score from [`LINE_SCORES`], capped at the five-row entry.
//! - Each cleared row holding a special block adds 200.
//! - A level completes when its timer runs out while the board is below 99% full.

use crate::board::{Board, LineClear, BOARD_SIZE};
use crate::types::{
    BASE_FALL_SPEED, FALL_SPEED_STEP, LEVEL_FILL_LIMIT_PERCENT, LINE_SCORES, LOCK_POINTS,
    MIN_FALL_SPEED, MUSIC_TRACKS, SPECIAL_LINE_BONUS, SPECIAL_LOCK_BONUS,
};

/// Score calculation result for one line-clear pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points from the line table
    pub line_clear_score: u32,
    /// Bonus for special rows
    pub special_bonus: u32,
    pub total: u32,
}

/// Points for clearing `lines` rows at once
pub fn calculate_line_score(lines: u32) -> u32 {
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx]
}

/// Points for locking a piece, independent of any clear
pub fn calculate_lock_score(special: bool) -> u32 {
    if special {
        LOCK_POINTS + SPECIAL_LOCK_BONUS
    } else {
        LOCK_POINTS
    }
}

/// Calculate the score for a line-clear pass
pub fn calculate_score(clear: LineClear) -> ScoreResult {
    if clear.lines == 0 {
        return ScoreResult::default();
    }

    let line_clear_score = calculate_line_score(clear.lines);
    let special_bonus = clear.special_lines.saturating_mul(SPECIAL_LINE_BONUS);

    ScoreResult {
        line_clear_score,
        special_bonus,
        total: line_clear_score.saturating_add(special_bonus),
    }
}

/// Gravity interval in frames for a level
///
/// Level 1 runs at the base speed; later levels shave 6 frames per level
/// down to the floor.
pub fn fall_speed_for_level(level: u32) -> u32 {
    if level <= 1 {
        return BASE_FALL_SPEED;
    }
    BASE_FALL_SPEED
        .saturating_sub(level.saturating_mul(FALL_SPEED_STEP))
        .max(MIN_FALL_SPEED)
}

/// Background music track for a level
pub fn music_track_for_level(level: u32) -> u32 {
    level.saturating_sub(1) % MUSIC_TRACKS
}

/// Whether an expiring level timer completes the level (true) or ends the game (false)
pub fn level_can_complete(board: &Board) -> bool {
    (board.filled_cells() as u64) * 100 < (BOARD_SIZE as u64) * (LEVEL_FILL_LIMIT_PERCENT as u64)
}
