//! Tic-Tac-Toe with move history and replay
//!
//! Every move produces a new immutable board snapshot. The game keeps the
//! whole list of snapshots so the player can jump back to any earlier move;
//! playing from an earlier move discards the snapshots after it.
//!
//! # Architecture
//!
//! - [`board`]: `Mark`, `Pos` and the 3x3 `Board` snapshot
//! - [`rules`]: win and draw detection
//! - [`game`]: history, time travel, status and the move list
//! - [`config`]: command line options of the native binary
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, GameStatus, Mark};
//!
//! let mut game = GameState::new();
//! for cell in [0, 1, 4, 2, 8] {
//!     game.apply_move(cell).unwrap();
//! }
//! assert_eq!(game.status(), GameStatus::Winner(Mark::X));
//! assert_eq!(game.status().to_string(), "Winner: X");
//!
//! // Back to the start and play somewhere else: later moves are dropped
//! game.jump_to(0).unwrap();
//! game.apply_move(4).unwrap();
//! assert_eq!(game.history().len(), 2);
//! ```

pub mod board;
pub mod config;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use game::{GameError, GameState, GameStatus, MoveEntry, SortOrder};
pub use rules::{detect, WinningLine};
