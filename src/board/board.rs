//! Immutable 3x3 board snapshot

use super::{Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use std::fmt;

/// Game board, row-major (index = row * 3 + col)
///
/// A board is never edited in place by the game: every move produces a new
/// snapshot through [`Board::with_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; TOTAL_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Mark::Empty; TOTAL_CELLS],
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Copy of this board with `pos` set to `mark`
    #[inline]
    pub fn with_mark(&self, pos: Pos, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[pos.to_index()] = mark;
        next
    }

    /// Marks placed so far
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Every cell is taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|m| m.is_empty())
    }

    /// Cells where `self` and `other` differ
    pub fn diff(&self, other: &Board) -> Vec<Pos> {
        Pos::all().filter(|&p| self.get(p) != other.get(p)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * BOARD_SIZE + col] {
                    Mark::Empty => write!(f, ".")?,
                    mark => write!(f, "{mark}")?,
                }
            }
        }
        Ok(())
    }
}
