//! Rejected game operations.

use derive_more::{Display, Error};

use crate::board::Mark;

/// Why a move or a history jump was refused.
///
/// A rejected operation never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Cell index outside the 3x3 board.
    #[display("cell {cell} is outside the 3x3 board")]
    CellOutOfRange {
        /// Requested index.
        cell: usize,
    },
    /// Cell already holds a mark.
    #[display("cell {cell} is already taken")]
    CellOccupied {
        /// Requested index.
        cell: usize,
    },
    /// The displayed board already has a completed line.
    #[display("game already won by {winner}")]
    GameOver {
        /// Mark that completed the line.
        winner: Mark,
    },
    /// Stepping back from the empty starting board.
    #[display("already at game start")]
    AtGameStart,
    /// History has no snapshot at the requested index.
    #[display("move #{target} does not exist (history has {len} entries)")]
    MoveOutOfRange {
        /// Requested move index.
        target: usize,
        /// Current history length.
        len: usize,
    },
}
