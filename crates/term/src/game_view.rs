//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.
//!
//! Layout, left to right: the next-piece column, the framed 10x17 board, and
//! the stats column (player, score, level, lines, time). The level-up banner
//! sits under the board; pause and game-over messages overlay it.

use crate::core::{get_shape, GameSnapshot, QueuedPiece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Block, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BOARD_BG: Rgb = Rgb::new(29, 29, 41);
const SCREEN_BG: Rgb = Rgb::new(3, 5, 22);

/// Width of the next-piece column in terminal columns.
const NEXT_PANEL_W: u16 = 12;
/// Rows reserved for one preview piece (tallest spawn orientation plus a gap).
const PREVIEW_ROWS: u16 = 4;

/// Color of each piece kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 230),
        PieceKind::O => Rgb::new(250, 240, 90),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::L => Rgb::new(255, 170, 60),
        PieceKind::J => Rgb::new(80, 110, 240),
        PieceKind::Z => Rgb::new(230, 70, 80),
        PieceKind::S => Rgb::new(90, 220, 110),
        PieceKind::U => Rgb::new(120, 120, 130),
        PieceKind::W => Rgb::new(240, 120, 200),
        PieceKind::Long => Rgb::new(170, 180, 255),
        PieceKind::V => Rgb::new(190, 50, 200),
    }
}

/// Glyph and style for a block drawn over `bg`.
///
/// Special blocks carry a star mark on the piece color.
fn block_glyph(block: Block, bg: Rgb) -> (char, CellStyle) {
    let color = piece_color(block.kind);
    if block.special {
        ('*', CellStyle::new(Rgb::new(255, 255, 255), color).bold())
    } else {
        ('█', CellStyle::new(color, bg))
    }
}

const BANNER_PREFIX: &str = "LEVEL ";

fn digit_count(mut value: u32) -> u16 {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares typical terminal glyphs.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the board frame inside `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h + 1) / 2,
        )
    }

    /// Render a session into an existing framebuffer.
    ///
    /// Reuses the framebuffer allocation; it is only resized when the
    /// viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        player: &str,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 210), SCREEN_BG);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(block) => self.draw_block(fb, start_x, start_y, x as u16, y as u16, *block),
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = snap.active {
            let block = Block {
                kind: active.kind,
                special: active.special,
            };
            for (x, y) in active.cells() {
                if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                    self.draw_block(fb, start_x, start_y, x as u16, y as u16, block);
                }
            }
        }

        self.draw_next_panel(fb, &snap.queue, start_x, start_y);
        self.draw_stats_panel(fb, snap, player, viewport, start_x + frame_w + 2, start_y);

        if let Some(level) = snap.banner_level {
            let style = CellStyle::new(Rgb::new(255, 220, 100), SCREEN_BG).bold();
            let text_w = BANNER_PREFIX.len() as u16 + digit_count(level);
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let y = start_y + frame_h;
            fb.put_str(x, y, BANNER_PREFIX, style);
            fb.put_u32(x + BANNER_PREFIX.len() as u16, y, level, style);
        }

        if snap.paused() {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, &["PAUSED", "", "P resume", "ESC menu"]);
        } else if snap.game_over() {
            let score = format!("SCORE {}", snap.score);
            self.draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", score.as_str(), "", "SPACE play", "H scores", "ESC menu"],
            );
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, player: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, player, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╔', style);
        fb.put_char(x + w - 1, y, '╗', style);
        fb.put_char(x, y + h - 1, '╚', style);
        fb.put_char(x + w - 1, y + h - 1, '╝', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '═', style);
            fb.put_char(x + dx, y + h - 1, '═', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '║', style);
            fb.put_char(x + w - 1, y + dy, '║', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(70, 70, 90), BOARD_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, block: Block) {
        let (ch, style) = block_glyph(block, BOARD_BG);
        self.fill_cell_rect(fb, start_x, start_y, x, y, ch, style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_next_panel(&self, fb: &mut FrameBuffer, queue: &[QueuedPiece], start_x: u16, start_y: u16) {
        let Some(panel_x) = start_x.checked_sub(NEXT_PANEL_W + 1) else {
            return;
        };
        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        fb.put_str(panel_x, start_y, "NEXT", label);

        for (i, piece) in queue.iter().enumerate() {
            let top = start_y + 2 + i as u16 * PREVIEW_ROWS;
            let block = Block {
                kind: piece.kind,
                special: piece.special,
            };
            for &(dx, dy) in get_shape(piece.kind, Rotation::North) {
                let px = panel_x + dx as u16 * 2;
                let py = top + dy as u16;
                let (ch, style) = block_glyph(block, SCREEN_BG);
                fb.fill_rect(px, py, 2, 1, ch, style);
            }
        }
    }

    fn draw_stats_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        player: &str,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let player_style = CellStyle::new(Rgb::new(255, 120, 120), SCREEN_BG).bold();

        let mut y = start_y;
        fb.put_str(panel_x, y, "PLAYER", label);
        fb.put_str(panel_x, y + 1, player, player_style);
        y += 3;

        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("TIME", snap.timer_secs),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }
    }

    fn draw_centered_in_frame(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        lines: &[&str],
    ) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let top = start_y + frame_h.saturating_sub(lines.len() as u16) / 2;
        let box_w = frame_w.saturating_sub(4);
        fb.fill_rect(start_x + 2, top.saturating_sub(1), box_w, lines.len() as u16 + 2, ' ', style);
        for (i, line) in lines.iter().enumerate() {
            self.draw_centered_in_frame(fb, start_x, frame_w, top + i as u16, line, style);
        }
    }
}
