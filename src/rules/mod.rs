//! Game rules for Tic-Tac-Toe
//!
//! - Win detection (three in a row, column or diagonal)
//! - Draw detection (full board, no line)

pub mod draw;
pub mod win;

// Re-exports for convenient access
pub use draw::is_draw;
pub use win::{check_winner, detect, WinningLine, LINES};
