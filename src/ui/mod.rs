//! GUI module for the Tic-Tac-Toe game
//!
//! This module provides a native and web GUI using egui/eframe.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
pub use board_view::BoardView;
