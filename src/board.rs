use crate::error::{OthelloError, Result};
use crate::mask::{MAX_SIDE, Mask};
use crate::types::{Cell, Color, Position};

pub const MIN_SIDE: usize = 4;

/// Reversi board of `rows x cols` cells represented by two bitboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    black: Mask,
    white: Mask,
}

impl Board {
    /// Creates the initial board: the four center cells hold `top_left` on the
    /// main diagonal and its opponent on the anti-diagonal.
    pub fn new(rows: usize, cols: usize, top_left: Color) -> Result<Self> {
        check_dimensions(rows, cols)?;

        let mut board = Self {
            rows,
            cols,
            black: Mask::EMPTY,
            white: Mask::EMPTY,
        };
        let (top, left) = (rows / 2 - 1, cols / 2 - 1);
        board.put(top, left, top_left);
        board.put(top, left + 1, top_left.opponent());
        board.put(top + 1, left, top_left.opponent());
        board.put(top + 1, left + 1, top_left);

        Ok(board)
    }

    /// Builds a board from row-major cells.
    pub fn from_cells(rows: usize, cols: usize, cells: &[Cell]) -> Result<Self> {
        check_dimensions(rows, cols)?;
        if cells.len() != rows * cols {
            return Err(OthelloError::CellCount {
                expected: rows * cols,
                actual: cells.len(),
            });
        }

        let mut board = Self {
            rows,
            cols,
            black: Mask::EMPTY,
            white: Mask::EMPTY,
        };
        for (idx, cell) in cells.iter().enumerate() {
            match cell {
                Cell::Black => board.black.insert(idx),
                Cell::White => board.white.insert(idx),
                Cell::Empty => {}
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Validates signed coordinates against the board.
    pub fn position(&self, row: i64, col: i64) -> Result<Position> {
        if !self.in_bounds(row, col) {
            return Err(OthelloError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        // In bounds implies both fit in u8 since MAX_SIDE <= 16.
        Ok(Position::new(row as u8, col as u8))
    }

    pub fn get(&self, row: i64, col: i64) -> Result<Cell> {
        let pos = self.position(row, col)?;
        Ok(self.cell_at(self.index(pos)))
    }

    /// Returns the cell at `pos`, or `OutOfBounds` for a stale position.
    pub fn cell(&self, pos: Position) -> Result<Cell> {
        self.get(pos.row.into(), pos.col.into())
    }

    /// Overwrites a single cell. Callers guarantee `pos` is on the board.
    pub(crate) fn set(&mut self, pos: Position, color: Color) {
        let idx = self.index(pos);
        debug_assert!(idx < self.cell_count(), "set() outside the board: {pos:?}");
        let (me, opp) = self.masks_mut(color);
        me.insert(idx);
        opp.remove(idx);
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u32, u32) {
        (self.black.count(), self.white.count())
    }

    pub fn empty_count(&self) -> u32 {
        let (black_count, white_count) = self.count();
        self.cell_count() as u32 - black_count - white_count
    }

    /// Row-major iterator over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count()).map(|idx| self.cell_at(idx))
    }

    /// Converts the board to row-major bytes where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells().map(Cell::to_u8).collect()
    }

    /// Returns `(me, opp)` masks for `color`.
    pub fn masks(&self, color: Color) -> (Mask, Mask) {
        match color {
            Color::Black => (self.black, self.white),
            Color::White => (self.white, self.black),
        }
    }

    pub fn occupied(&self) -> Mask {
        self.black | self.white
    }

    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row as usize * self.cols + pos.col as usize
    }

    pub(crate) fn position_of(&self, idx: usize) -> Position {
        Position::new((idx / self.cols) as u8, (idx % self.cols) as u8)
    }

    pub(crate) fn in_bounds(&self, row: i64, col: i64) -> bool {
        (0..self.rows as i64).contains(&row) && (0..self.cols as i64).contains(&col)
    }

    fn cell_at(&self, idx: usize) -> Cell {
        if self.black.contains(idx) {
            Cell::Black
        } else if self.white.contains(idx) {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    fn put(&mut self, row: usize, col: usize, color: Color) {
        self.set(Position::new(row as u8, col as u8), color);
    }

    fn masks_mut(&mut self, color: Color) -> (&mut Mask, &mut Mask) {
        match color {
            Color::Black => (&mut self.black, &mut self.white),
            Color::White => (&mut self.white, &mut self.black),
        }
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    let valid = |side: usize| side % 2 == 0 && (MIN_SIDE..=MAX_SIDE).contains(&side);
    if valid(rows) && valid(cols) {
        Ok(())
    } else {
        Err(OthelloError::Dimension { rows, cols })
    }
}
