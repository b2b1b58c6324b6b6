//! Win condition checking for Tic-Tac-Toe
//!
//! A game is won by three equal marks on a row, a column or a diagonal.
//! Lines are checked in a fixed order (rows top to bottom, columns left to
//! right, then the two diagonals) so the reported line is deterministic.

use crate::board::{Board, Mark, Pos};
use tracing::instrument;

/// The eight winning triples, in checking order
pub const LINES: [[Pos; 3]; 8] = [
    // Rows
    [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)],
    [Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)],
    [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)],
    // Columns
    [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)],
    [Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1)],
    [Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2)],
    // Diagonals
    [Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)],
    [Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)],
];

/// A completed line and the mark that completed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub winner: Mark,
    pub line: [Pos; 3],
}

impl WinningLine {
    /// Whether `pos` is one of the three winning cells
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.line.contains(&pos)
    }

    /// Flat cell indices of the line
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Pos::to_index)
    }
}

/// Find the first completed line on the board
///
/// Returns `None` when no row, column or diagonal holds three equal
/// non-empty marks.
#[instrument(level = "trace", skip(board))]
pub fn detect(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a);
        if !mark.is_empty() && mark == board.get(b) && mark == board.get(c) {
            Some(WinningLine {
                winner: mark,
                line: [a, b, c],
            })
        } else {
            None
        }
    })
}

/// Check for a winner without the line
pub fn check_winner(board: &Board) -> Option<Mark> {
    detect(board).map(|w| w.winner)
}
