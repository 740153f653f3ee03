//! Capture scanning: which opponent runs a placement flips, and committing it.

use crate::board::Board;
use crate::error::{OthelloError, Result};
use crate::mask::Mask;
use crate::types::{Color, Position};

const DIRECTIONS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells a placement would flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub captured: bool,
    pub flipped: Mask,
}

impl Capture {
    fn from_flips(flipped: Mask) -> Self {
        Self {
            captured: !flipped.is_empty(),
            flipped,
        }
    }

    /// Flipped cells as positions on `board`, in row-major order.
    pub fn flipped_positions(&self, board: &Board) -> Vec<Position> {
        self.flipped.iter().map(|idx| board.position_of(idx)).collect()
    }
}

/// Simulates `mv` for `active` without touching the board.
pub fn evaluate_move(board: &Board, mv: Position, active: Color) -> Result<Capture> {
    let idx = require_empty(board, mv)?;
    Ok(Capture::from_flips(collect_flips(board, idx, active)))
}

/// Places `active` at `mv` and flips captured runs.
/// A placement that captures nothing leaves the board unchanged.
pub fn commit_move(board: &mut Board, mv: Position, active: Color) -> Result<Capture> {
    let capture = evaluate_move(board, mv, active)?;
    if capture.captured {
        board.set(mv, active);
        for idx in capture.flipped {
            let pos = board.position_of(idx);
            board.set(pos, active);
        }
    }
    Ok(capture)
}

/// Returns the mask of every capturing placement for `color`.
pub fn legal_moves(board: &Board, color: Color) -> Mask {
    empty_cells(board)
        .filter(|&idx| !collect_flips(board, idx, color).is_empty())
        .collect()
}

pub fn any_legal_move_exists(board: &Board, color: Color) -> bool {
    empty_cells(board).any(|idx| !collect_flips(board, idx, color).is_empty())
}

fn empty_cells(board: &Board) -> impl Iterator<Item = usize> + '_ {
    let occupied = board.occupied();
    (0..board.cell_count()).filter(move |&idx| !occupied.contains(idx))
}

fn require_empty(board: &Board, mv: Position) -> Result<usize> {
    if board.cell(mv)?.is_empty() {
        Ok(board.index(mv))
    } else {
        Err(OthelloError::NotEmpty {
            row: mv.row,
            col: mv.col,
        })
    }
}

fn collect_flips(board: &Board, idx: usize, color: Color) -> Mask {
    let (me, opp) = board.masks(color);
    let pos = board.position_of(idx);
    let (row, col) = (i64::from(pos.row), i64::from(pos.col));
    let mut flips = Mask::EMPTY;

    for (dr, dc) in DIRECTIONS {
        let mut r = row + dr;
        let mut c = col + dc;
        let mut line = Mask::EMPTY;

        while board.in_bounds(r, c) {
            let square = r as usize * board.cols() + c as usize;
            if opp.contains(square) {
                line.insert(square);
            } else {
                if me.contains(square) {
                    flips |= line;
                }
                break;
            }

            r += dr;
            c += dc;
        }
    }

    flips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    /// Parses rows of `B`, `W` and `.` into a board.
    fn board_from(rows: &[&str]) -> Board {
        let cells: Vec<Cell> = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| match c {
                'B' => Cell::Black,
                'W' => Cell::White,
                _ => Cell::Empty,
            })
            .collect();
        Board::from_cells(rows.len(), rows[0].len(), &cells).unwrap()
    }

    #[test]
    fn horizontal_run_anchored_by_own_disk_flips() {
        let mut board = Board::new(4, 4, Color::Black).unwrap();

        let capture = commit_move(&mut board, Position::new(1, 3), Color::Black).unwrap();

        assert!(capture.captured);
        assert_eq!(capture.flipped_positions(&board), vec![Position::new(1, 2)]);
        assert_eq!(board.get(1, 3), Ok(Cell::Black));
        assert_eq!(board.get(1, 2), Ok(Cell::Black));
        assert_eq!(board.count(), (4, 1));
        assert_eq!(board.empty_count(), 11);
    }

    #[test]
    fn isolated_placement_captures_nothing_and_keeps_board() {
        let mut board = Board::new(4, 4, Color::Black).unwrap();
        let before = board;

        let capture = commit_move(&mut board, Position::new(0, 0), Color::Black).unwrap();

        assert!(!capture.captured);
        assert!(capture.flipped.is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn evaluate_never_mutates() {
        let board = Board::new(4, 4, Color::Black).unwrap();
        let before = board;

        let capture = evaluate_move(&board, Position::new(1, 3), Color::Black).unwrap();

        assert!(capture.captured);
        assert_eq!(board, before);
    }

    #[test]
    fn run_reaching_the_edge_is_discarded() {
        let board = board_from(&["....", ".WW.", "....", "...."]);

        let capture = evaluate_move(&board, Position::new(1, 0), Color::Black).unwrap();

        assert!(!capture.captured);
    }

    #[test]
    fn run_ending_on_empty_is_discarded() {
        let board = board_from(&["......", ".WW.B.", "......", "......"]);

        let capture = evaluate_move(&board, Position::new(1, 0), Color::Black).unwrap();

        assert!(!capture.captured);
        assert_eq!(capture.flipped_positions(&board), Vec::<Position>::new());
    }

    #[test]
    fn flips_union_across_all_eight_directions() {
        let board = board_from(&[
            "B.B.B.", //
            ".WWW..", //
            "BW.WB.", //
            ".WWW..", //
            "B.B.B.", //
            "......",
        ]);

        let capture = evaluate_move(&board, Position::new(2, 2), Color::Black).unwrap();

        assert_eq!(
            capture.flipped_positions(&board),
            vec![
                Position::new(1, 1),
                Position::new(1, 2),
                Position::new(1, 3),
                Position::new(2, 1),
                Position::new(2, 3),
                Position::new(3, 1),
                Position::new(3, 2),
                Position::new(3, 3),
            ]
        );
    }

    #[test]
    fn long_run_on_16x16_board() {
        let mut cells = vec![Cell::Empty; 256];
        cells[0] = Cell::White;
        for col in 1..15 {
            cells[15 * 16 + col] = Cell::Black;
        }
        cells[15 * 16] = Cell::White;
        let mut board = Board::from_cells(16, 16, &cells).unwrap();

        let capture = commit_move(&mut board, Position::new(15, 15), Color::White).unwrap();

        assert_eq!(capture.flipped.count(), 14);
        assert_eq!(board.count(), (0, 17));
    }

    #[test]
    fn occupied_and_out_of_bounds_targets_are_rejected() {
        let mut board = Board::new(4, 4, Color::Black).unwrap();
        let before = board;

        assert_eq!(
            commit_move(&mut board, Position::new(1, 1), Color::White),
            Err(OthelloError::NotEmpty { row: 1, col: 1 })
        );
        assert!(matches!(
            commit_move(&mut board, Position::new(4, 0), Color::White),
            Err(OthelloError::OutOfBounds { .. })
        ));
        assert_eq!(board, before);
    }

    #[test]
    fn initial_4x4_legal_moves() {
        let board = Board::new(4, 4, Color::White).unwrap();
        let positions: Vec<Position> = legal_moves(&board, Color::Black)
            .iter()
            .map(|idx| board.position_of(idx))
            .collect();

        assert_eq!(
            positions,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(2, 3),
                Position::new(3, 2),
            ]
        );
        assert!(any_legal_move_exists(&board, Color::White));
    }

    #[test]
    fn no_legal_move_when_opponent_absent() {
        let board = board_from(&["BBBB", "B..B", "B..B", "BBBB"]);

        assert!(!any_legal_move_exists(&board, Color::Black));
        assert!(!any_legal_move_exists(&board, Color::White));
        assert!(legal_moves(&board, Color::White).is_empty());
    }
}
