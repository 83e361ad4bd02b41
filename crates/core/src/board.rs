//! Board module - manages the game grid
//!
//! The board is a 10x17 grid where each cell is empty or holds a locked block.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..16 (top to bottom).
//!
//! Rows above the grid (`y < 0`) are never stored. Placement checks treat them
//! as always empty so tall pieces can spawn and rotate against the ceiling.

use crate::pieces::get_shape;
use crate::types::{Block, Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
pub const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Result of a line-clear pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClear {
    /// Full rows removed
    pub lines: u32,
    /// Removed rows that contained at least one special block
    pub special_lines: u32,
}

/// The game board - 10 columns x 17 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a piece cell may sit at (x, y)
    ///
    /// Walls and floor are solid. Above the grid is always free; inside the
    /// grid the cell must be empty.
    #[inline]
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Check whether a piece fits at anchor (x, y)
    pub fn can_place(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        get_shape(kind, rotation)
            .iter()
            .all(|&(dx, dy)| self.is_free(x + dx, y + dy))
    }

    /// Commit a piece to the board
    ///
    /// If the piece does not fit where it is, it is lifted one row before
    /// committing. Only cells inside the grid are written. Returns the anchor
    /// row actually used.
    pub fn lock(&mut self, kind: PieceKind, rotation: Rotation, x: i8, y: i8, special: bool) -> i8 {
        let y = if self.can_place(kind, rotation, x, y) {
            y
        } else {
            y - 1
        };

        let block = Block { kind, special };
        for &(dx, dy) in get_shape(kind, rotation) {
            self.set(x + dx, y + dy, Some(block));
        }
        y
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|cell| cell.is_some()))
    }

    fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Clear a row and shift all rows above down
    /// Returns the number of lines cleared (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }

        self.cells[..width].fill(None);

        1
    }

    /// Clear every full row
    ///
    /// Rows are scanned top to bottom; each full row is removed and the rows
    /// above it drop by one. A removed row counts as special when any of its
    /// blocks came from a special piece.
    pub fn clear_full_lines(&mut self) -> LineClear {
        let mut result = LineClear::default();

        for y in 0..BOARD_HEIGHT as usize {
            if !self.is_row_full(y) {
                continue;
            }
            let special = self
                .row(y)
                .is_some_and(|row| row.iter().flatten().any(|block| block.special));
            self.clear_row(y);
            result.lines += 1;
            if special {
                result.special_lines += 1;
            }
        }

        result
    }

    /// Number of occupied cells
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Occupied cells over total cells
    pub fn fill_ratio(&self) -> f64 {
        self.filled_cells() as f64 / BOARD_SIZE as f64
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out
            .iter_mut()
            .zip(self.cells.chunks_exact(BOARD_WIDTH as usize))
        {
            dst.copy_from_slice(src);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
