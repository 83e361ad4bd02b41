//! Game state module - the session state machine
//!
//! Ties together the board, the shape catalog, the preview queue and scoring.
//! One [`GameState::tick`] call is one frame: it advances the level timer,
//! horizontal auto-shift, soft drop and gravity for the active piece.
//!
//! Lifecycle: `Idle → Running ⇄ Paused → Over`, and `start_session` begins a
//! fresh run from any state.

use arrayvec::ArrayVec;

use crate::auto_shift::AutoShift;
use crate::board::Board;
use crate::high_scores::{clamp_name, HighScoreEntry};
use crate::pieces::{get_shape, try_rotate, PieceShape, SPAWN_POSITION};
use crate::rng::{PieceQueue, QueuedPiece};
use crate::scoring::{
    calculate_lock_score, calculate_score, fall_speed_for_level, level_can_complete,
    music_track_for_level,
};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Events buffered between two drains
pub const EVENT_CAPACITY: usize = 16;

pub type EventBuffer = ArrayVec<CoreEvent, EVENT_CAPACITY>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub special: bool,
}

impl ActivePiece {
    /// Create a piece at the spawn anchor
    pub fn spawn(piece: QueuedPiece) -> Self {
        Self {
            kind: piece.kind,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
            special: piece.special,
        }
    }

    /// Get the shape (cell offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape()
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(self.kind, self.rotation, self.x, self.y)
    }
}

/// The transient "LEVEL N" message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    pub level: u32,
    /// Session clock value at which the banner disappears
    pub expires_at_ms: u64,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    queue: PieceQueue,
    lifecycle: Lifecycle,
    score: u32,
    level: u32,
    lines: u32,
    pieces_locked: u32,
    /// Seconds left on the level countdown
    timer_secs: u32,
    /// Running time not yet converted into a countdown step
    timer_accum_ms: u32,
    /// Frames per gravity step
    fall_speed: u32,
    frame_counter: u32,
    auto_shift: AutoShift,
    /// Total time seen by `tick`, including paused frames
    clock_ms: u64,
    banner: Option<Banner>,
    events: EventBuffer,
    player_name: String,
}

impl GameState {
    /// Create an idle session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            queue: PieceQueue::new(seed),
            lifecycle: Lifecycle::Idle,
            score: 0,
            level: 1,
            lines: 0,
            pieces_locked: 0,
            timer_secs: LEVEL_TIME_SECS,
            timer_accum_ms: 0,
            fall_speed: BASE_FALL_SPEED,
            frame_counter: 0,
            auto_shift: AutoShift::new(),
            clock_ms: 0,
            banner: None,
            events: EventBuffer::new(),
            player_name: String::new(),
        }
    }

    /// Reset the board and counters and spawn the first piece
    pub fn start_session(&mut self) {
        self.board.clear();
        self.active = None;
        self.queue.refill();
        self.lifecycle = Lifecycle::Running;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.pieces_locked = 0;
        self.timer_secs = LEVEL_TIME_SECS;
        self.timer_accum_ms = 0;
        self.fall_speed = BASE_FALL_SPEED;
        self.frame_counter = 0;
        self.auto_shift.reset();
        self.banner = None;
        self.events.clear();
        self.spawn_piece();
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn is_paused(&self) -> bool {
        self.lifecycle == Lifecycle::Paused
    }

    pub fn is_over(&self) -> bool {
        self.lifecycle == Lifecycle::Over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Rows cleared this session
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn timer_secs(&self) -> u32 {
        self.timer_secs
    }

    pub fn fall_speed(&self) -> u32 {
        self.fall_speed
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn queue(&self) -> &[QueuedPiece; QUEUE_LEN] {
        self.queue.entries()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Set the name recorded with the final score (trimmed to 12 characters)
    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = clamp_name(name);
    }

    /// Drain the events produced since the last call
    pub fn take_events(&mut self) -> EventBuffer {
        std::mem::take(&mut self.events)
    }

    fn push_event(&mut self, event: CoreEvent) {
        // A full buffer means nobody is draining; dropping is fine.
        let _ = self.events.try_push(event);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active;
        out.queue = *self.queue.entries();
        out.lifecycle = self.lifecycle;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.timer_secs = self.timer_secs;
        out.fall_speed = self.fall_speed;
        out.banner_level = self.banner.map(|b| b.level);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Pause a running session
    pub fn pause(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Running {
            return false;
        }
        self.lifecycle = Lifecycle::Paused;
        self.auto_shift.reset();
        true
    }

    /// Resume a paused session
    pub fn resume(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Paused {
            return false;
        }
        self.lifecycle = Lifecycle::Running;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.lifecycle {
            Lifecycle::Running => self.pause(),
            Lifecycle::Paused => self.resume(),
            Lifecycle::Idle | Lifecycle::Over => false,
        }
    }

    /// Spawn the next piece from the queue
    ///
    /// Ends the session when the piece does not fit at the spawn anchor.
    pub fn spawn_piece(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.queue.advance());

        if !piece.fits(&self.board) {
            self.active = None;
            self.end_game();
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let (x, y) = (active.x + dx, active.y + dy);
        if !self.board.can_place(active.kind, active.rotation, x, y) {
            return false;
        }

        self.active = Some(ActivePiece { x, y, ..active });
        true
    }

    /// Rotate the active piece forward, falling back to the reverse rotation
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        let rotated = try_rotate(active.kind, active.rotation, active.x, active.y, |x, y| {
            board.is_free(x, y)
        });

        match rotated {
            Some(rotation) => {
                self.active = Some(ActivePiece { rotation, ..active });
                true
            }
            None => false,
        }
    }

    /// Drop the active piece as far as it goes and lock it
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        if self.active.is_none() {
            return 0;
        }

        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }

        self.lock_piece();
        distance
    }

    /// Lock the active piece onto the board, score it and spawn the next one
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock(active.kind, active.rotation, active.x, active.y, active.special);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.score = self
            .score
            .saturating_add(calculate_lock_score(active.special));
        self.push_event(CoreEvent::PieceLocked {
            kind: active.kind,
            special: active.special,
        });

        let clear = self.board.clear_full_lines();
        if clear.lines > 0 {
            let result = calculate_score(clear);
            self.score = self.score.saturating_add(result.total);
            self.lines = self.lines.saturating_add(clear.lines);
            self.push_event(CoreEvent::LinesCleared {
                lines: clear.lines,
                special_lines: clear.special_lines,
                points: result.total,
            });
        }

        if self.lifecycle == Lifecycle::Running {
            self.spawn_piece();
        }
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.timer_secs = LEVEL_TIME_SECS;
        self.fall_speed = fall_speed_for_level(self.level);
        self.banner = Some(Banner {
            level: self.level,
            expires_at_ms: self.clock_ms + BANNER_MS as u64,
        });
        self.push_event(CoreEvent::LevelUp {
            level: self.level,
            music_track: music_track_for_level(self.level),
        });
    }

    fn end_game(&mut self) {
        if self.lifecycle == Lifecycle::Over {
            return;
        }
        self.lifecycle = Lifecycle::Over;
        self.auto_shift.reset();
        self.push_event(CoreEvent::GameOver {
            score: self.score,
            level: self.level,
        });
    }

    /// Count down the level timer; returns true when the session ended
    fn advance_timer(&mut self, elapsed_ms: u32) -> bool {
        self.timer_accum_ms = self.timer_accum_ms.saturating_add(elapsed_ms);

        while self.timer_accum_ms >= TIMER_STEP_MS {
            self.timer_accum_ms -= TIMER_STEP_MS;
            self.timer_secs = self.timer_secs.saturating_sub(1);
            if self.timer_secs > 0 {
                continue;
            }

            if level_can_complete(&self.board) {
                self.level_up();
            } else {
                self.end_game();
                return true;
            }
        }

        false
    }

    /// Main game tick - one frame
    ///
    /// Returns true when gravity was applied or the session ended this frame.
    pub fn tick(&mut self, elapsed_ms: u32, input: FrameInput) -> bool {
        self.clock_ms = self.clock_ms.saturating_add(elapsed_ms as u64);
        if self
            .banner
            .is_some_and(|banner| self.clock_ms >= banner.expires_at_ms)
        {
            self.banner = None;
        }

        if self.lifecycle != Lifecycle::Running {
            return false;
        }

        if self.advance_timer(elapsed_ms) {
            return true;
        }

        if self.active.is_none() {
            return false;
        }

        if let Some(dir) = self.auto_shift.update(input.horizontal) {
            self.try_move(dir.dx(), 0);
        }

        if input.soft_drop {
            self.frame_counter += self.fall_speed / SOFT_DROP_DIVISOR;
        }

        self.frame_counter += 1;
        if self.frame_counter < self.fall_speed {
            return false;
        }

        self.frame_counter = 0;
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Apply a one-shot game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => self.toggle_pause(),
            _ if self.lifecycle != Lifecycle::Running => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.try_move(0, 1),
            GameAction::HardDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.try_rotate(),
        }
    }

    /// High-score entry for a finished session
    pub fn final_entry(&self, date: impl Into<String>) -> Option<HighScoreEntry> {
        if self.lifecycle != Lifecycle::Over {
            return None;
        }
        Some(HighScoreEntry::new(
            &self.player_name,
            self.score,
            self.level,
            date,
        ))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(seed: u32) -> GameState {
        let mut state = GameState::new(seed);
        state.start_session();
        state
    }

    fn place(state: &mut GameState, kind: PieceKind, rotation: Rotation, x: i8, y: i8, special: bool) {
        state.active = Some(ActivePiece {
            kind,
            rotation,
            x,
            y,
            special,
        });
    }

    /// Fill rows `from..=to` except column 0.
    fn fill_rows_leaving_left_column(state: &mut GameState, from: i8, to: i8) {
        for y in from..=to {
            for x in 1..BOARD_WIDTH as i8 {
                state.board_mut().set(x, y, Some(Block { kind: PieceKind::O, special: false }));
            }
        }
    }

    fn fill_cells(state: &mut GameState, count: usize) {
        let block = Some(Block { kind: PieceKind::T, special: false });
        for i in 0..count {
            let x = (i % BOARD_WIDTH as usize) as i8;
            let y = BOARD_HEIGHT as i8 - 1 - (i / BOARD_WIDTH as usize) as i8;
            state.board_mut().set(x, y, block);
        }
    }

    #[test]
    fn test_new_game_state_is_idle() {
        let state = GameState::new(12345);
        assert_eq!(state.lifecycle(), Lifecycle::Idle);
        assert!(state.active().is_none());
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.queue().len(), QUEUE_LEN);
    }

    #[test]
    fn test_start_session_spawns_at_anchor() {
        let state = running(12345);
        assert!(state.is_running());
        let active = state.active().unwrap();
        assert_eq!((active.x, active.y), (5, 0));
        assert_eq!(active.rotation, Rotation::North);
        assert_eq!(state.timer_secs(), LEVEL_TIME_SECS);
        assert_eq!(state.fall_speed(), BASE_FALL_SPEED);
    }

    #[test]
    fn test_next_piece_comes_from_queue_front() {
        let mut state = running(12345);
        let next = state.queue()[0];
        let after = state.queue()[1];
        state.hard_drop();
        let active = state.active().unwrap();
        assert_eq!(active.kind, next.kind);
        assert_eq!(active.special, next.special);
        assert_eq!(state.queue()[0], after);
    }

    #[test]
    fn test_lock_plain_piece_scores_ten() {
        let mut state = running(1);
        place(&mut state, PieceKind::O, Rotation::North, 0, 15, false);
        state.lock_piece();
        assert_eq!(state.score(), 10);
        assert_eq!(
            state.take_events().as_slice(),
            &[CoreEvent::PieceLocked { kind: PieceKind::O, special: false }]
        );
    }

    #[test]
    fn test_lock_special_piece_scores_one_hundred_ten() {
        let mut state = running(1);
        place(&mut state, PieceKind::O, Rotation::North, 0, 15, true);
        state.lock_piece();
        assert_eq!(state.score(), 110);
    }

    #[test]
    fn test_four_lines_award_eight_hundred() {
        let mut state = running(1);
        fill_rows_leaving_left_column(&mut state, 13, 16);
        // I rotation 1 occupies column x+1, rows y-1..=y+2.
        place(&mut state, PieceKind::I, Rotation::East, -1, 14, false);
        state.lock_piece();

        assert_eq!(state.score(), 800 + 10);
        assert_eq!(state.lines(), 4);
        assert_eq!(state.board().filled_cells(), 0);
        let events = state.take_events();
        assert!(events.contains(&CoreEvent::LinesCleared {
            lines: 4,
            special_lines: 0,
            points: 800
        }));
    }

    #[test]
    fn test_five_lines_award_twelve_hundred() {
        let mut state = running(1);
        fill_rows_leaving_left_column(&mut state, 12, 16);
        // Long rotation 1 occupies column x+2, rows y..=y+4.
        place(&mut state, PieceKind::Long, Rotation::East, -2, 12, false);
        state.lock_piece();
        assert_eq!(state.score(), 1200 + 10);
        assert_eq!(state.lines(), 5);
    }

    #[test]
    fn test_special_piece_marks_cleared_rows_special() {
        let mut state = running(1);
        fill_rows_leaving_left_column(&mut state, 13, 16);
        place(&mut state, PieceKind::I, Rotation::East, -1, 14, true);
        state.lock_piece();
        // 800 for four rows, 4 * 200 special rows, 110 for the special lock.
        assert_eq!(state.score(), 800 + 800 + 110);
    }

    #[test]
    fn test_hard_drop_lands_on_floor() {
        let mut state = running(1);
        place(&mut state, PieceKind::O, Rotation::North, 0, 0, false);
        assert_eq!(state.hard_drop(), 15);
        assert!(state.board().is_occupied(0, 16));
        assert!(state.board().is_occupied(1, 15));
        assert_eq!(state.score(), 10);
    }

    #[test]
    fn test_move_rejected_at_wall() {
        let mut state = running(1);
        place(&mut state, PieceKind::O, Rotation::North, 0, 3, false);
        assert!(!state.try_move(-1, 0));
        assert_eq!(state.active().unwrap().x, 0);
        place(&mut state, PieceKind::O, Rotation::North, 8, 3, false);
        assert!(!state.try_move(1, 0));
        assert!(state.try_move(-1, 0));
    }

    #[test]
    fn test_rotation_blocked_both_ways_is_unchanged() {
        let mut state = running(1);
        place(&mut state, PieceKind::T, Rotation::North, 4, 5, false);
        // Both fallback candidates need the cell below the T's stem.
        state
            .board_mut()
            .set(5, 7, Some(Block { kind: PieceKind::O, special: false }));
        assert!(!state.try_rotate());
        assert_eq!(state.active().unwrap().rotation, Rotation::North);
    }

    #[test]
    fn test_rotation_falls_back_to_reverse() {
        let mut state = running(1);
        place(&mut state, PieceKind::L, Rotation::North, 4, 5, false);
        // Only the forward L rotation needs (x+1, y).
        state
            .board_mut()
            .set(5, 5, Some(Block { kind: PieceKind::O, special: false }));
        assert!(state.try_rotate());
        assert_eq!(state.active().unwrap().rotation, Rotation::West);
    }

    #[test]
    fn test_rotation_near_ceiling_uses_cells_above_grid() {
        let mut state = running(1);
        place(&mut state, PieceKind::I, Rotation::North, 3, 0, false);
        // Rotation 1 reaches y = -1, which is always free.
        assert!(state.try_rotate());
        assert_eq!(state.active().unwrap().rotation, Rotation::East);
    }

    #[test]
    fn test_gravity_steps_every_fall_speed_frames() {
        let mut state = running(1);
        place(&mut state, PieceKind::O, Rotation::North, 0, 0, false);
        for _ in 0..BASE_FALL_SPEED - 1 {
            assert!(!state.tick(TICK_MS, FrameInput::IDLE));
        }
        assert_eq!(state.active().unwrap().y, 0);
        assert!(state.tick(TICK_MS, FrameInput::IDLE));
        assert_eq!(state.active().unwrap().y, 1);
    }

    #[test]
    fn test_soft_drop_is_about_four_times_faster() {
        let mut state = running(1);
        place(&mut state, PieceKind::O, Rotation::North, 0, 0, false);
        let input = FrameInput {
            horizontal: None,
            soft_drop: true,
        };
        // 60 / 4 + 1 = 16 per frame reaches 60 on the fourth frame.
        for _ in 0..3 {
            state.tick(TICK_MS, input);
        }
        assert_eq!(state.active().unwrap().y, 0);
        state.tick(TICK_MS, input);
        assert_eq!(state.active().unwrap().y, 1);
    }

    #[test]
    fn test_gravity_locks_grounded_piece() {
        let mut state = running(1);
        place(&mut state, PieceKind::O, Rotation::North, 0, 15, false);
        for _ in 0..BASE_FALL_SPEED {
            state.tick(TICK_MS, FrameInput::IDLE);
        }
        assert!(state.board().is_occupied(0, 16));
        assert_eq!(state.pieces_locked(), 1);
        assert!(state.active().is_some());
    }

    #[test]
    fn test_held_direction_shifts_on_first_frame() {
        let mut state = running(1);
        place(&mut state, PieceKind::O, Rotation::North, 4, 3, false);
        let left = FrameInput {
            horizontal: Some(Horizontal::Left),
            soft_drop: false,
        };
        state.tick(TICK_MS, left);
        assert_eq!(state.active().unwrap().x, 3);
        state.tick(TICK_MS, left);
        assert_eq!(state.active().unwrap().x, 3);
    }

    #[test]
    fn test_timer_counts_wall_clock_seconds() {
        let mut state = running(1);
        state.tick(999, FrameInput::IDLE);
        assert_eq!(state.timer_secs(), LEVEL_TIME_SECS);
        state.tick(1, FrameInput::IDLE);
        assert_eq!(state.timer_secs(), LEVEL_TIME_SECS - 1);
    }

    #[test]
    fn test_timer_stops_while_paused() {
        let mut state = running(1);
        assert!(state.pause());
        state.tick(5000, FrameInput::IDLE);
        assert_eq!(state.timer_secs(), LEVEL_TIME_SECS);
        assert!(state.resume());
        state.tick(1000, FrameInput::IDLE);
        assert_eq!(state.timer_secs(), LEVEL_TIME_SECS - 1);
    }

    #[test]
    fn test_timer_expiry_levels_up_on_playable_board() {
        let mut state = running(1);
        state.timer_secs = 1;
        state.take_events();
        state.tick(1000, FrameInput::IDLE);

        assert_eq!(state.level(), 2);
        assert_eq!(state.timer_secs(), LEVEL_TIME_SECS);
        assert_eq!(state.fall_speed(), 48);
        assert_eq!(state.banner().map(|b| b.level), Some(2));
        assert_eq!(
            state.take_events().as_slice(),
            &[CoreEvent::LevelUp { level: 2, music_track: 1 }]
        );
    }

    #[test]
    fn test_timer_expiry_on_full_board_ends_game() {
        let mut state = running(1);
        fill_cells(&mut state, 169);
        state.timer_secs = 1;
        state.take_events();
        assert!(state.tick(1000, FrameInput::IDLE));

        assert!(state.is_over());
        assert_eq!(state.level(), 1);
        assert_eq!(
            state.take_events().as_slice(),
            &[CoreEvent::GameOver { score: 0, level: 1 }]
        );
    }

    #[test]
    fn test_banner_clears_after_two_seconds() {
        let mut state = running(1);
        state.timer_secs = 1;
        state.tick(1000, FrameInput::IDLE);
        assert!(state.banner().is_some());
        assert_eq!(state.banner().unwrap().level, 2);

        state.tick(BANNER_MS - 1, FrameInput::IDLE);
        assert!(state.banner().is_some());
        state.tick(1, FrameInput::IDLE);
        assert!(state.banner().is_none());
    }

    #[test]
    fn test_banner_clears_while_paused() {
        let mut state = running(1);
        state.timer_secs = 1;
        state.tick(1000, FrameInput::IDLE);
        state.pause();
        state.tick(BANNER_MS, FrameInput::IDLE);
        assert!(state.banner().is_none());
    }

    #[test]
    fn test_blocked_spawn_ends_game() {
        let mut state = running(1);
        for y in 0..4 {
            for x in 5..BOARD_WIDTH as i8 {
                state
                    .board_mut()
                    .set(x, y, Some(Block { kind: PieceKind::S, special: false }));
            }
        }
        state.take_events();
        assert!(!state.spawn_piece());
        assert!(state.is_over());
        assert!(state.active().is_none());
        assert!(matches!(
            state.take_events().as_slice(),
            [CoreEvent::GameOver { .. }]
        ));
    }

    #[test]
    fn test_actions_ignored_unless_running() {
        let mut state = running(1);
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.is_paused());
        assert!(!state.apply_action(GameAction::MoveLeft));
        assert!(!state.apply_action(GameAction::HardDrop));
        assert!(state.apply_action(GameAction::Pause));
        assert!(state.is_running());
    }

    #[test]
    fn test_final_entry_only_after_game_over() {
        let mut state = running(1);
        state.set_player_name("ASTRONAUTA_ESTELAR");
        assert!(state.final_entry("2024-11-01 10:00:00").is_none());

        state.end_game();
        let entry = state.final_entry("2024-11-01 10:00:00").unwrap();
        assert_eq!(entry.name, "ASTRONAUTA_E");
        assert_eq!(entry.level, 1);
        assert_eq!(entry.date, "2024-11-01 10:00:00");
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = running(1);
        state.end_game();
        state.start_session();
        assert!(state.is_running());
        assert_eq!(state.score(), 0);
        assert_eq!(state.board().filled_cells(), 0);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = running(3);
        place(&mut state, PieceKind::V, Rotation::South, 2, 4, true);
        state.lock_piece();
        let snap = state.snapshot();
        assert_eq!(snap.score, state.score());
        assert_eq!(snap.queue, *state.queue());
        assert_eq!(snap.active, state.active());
        assert_eq!(
            snap.board[4][2],
            Some(Block { kind: PieceKind::V, special: true })
        );
        assert!(snap.playable());
    }
}
