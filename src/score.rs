use serde::Serialize;

use crate::board::Board;

/// Disk counts per color, always derived from a board scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

impl Score {
    pub fn recompute(board: &Board) -> Self {
        let (black, white) = board.count();
        Self { black, white }
    }

    pub fn total(&self) -> u32 {
        self.black + self.white
    }
}
