//! Game state: board history, time travel and status

mod error;
pub mod history;

pub use error::GameError;
pub use history::{move_label, move_list, MoveEntry, SortOrder};

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::board::{Board, Mark, Pos};
use crate::rules::{self, WinningLine};

/// Game status derived from the displayed board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Winner(Mark),
    Draw,
    NextPlayer(Mark),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Winner(mark) => write!(f, "Winner: {mark}"),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::NextPlayer(mark) => write!(f, "Next player: {mark}"),
        }
    }
}

/// Main game state
///
/// `history[0]` is the empty board and `history[i]` the board after move `i`.
/// `current_move` selects the displayed snapshot and decides whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: Vec<Board>,
    current_move: usize,
    sort_order: SortOrder,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::with_sort_order(SortOrder::default())
    }

    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
            sort_order,
        }
    }

    /// Back to an empty board; the sort order is kept
    pub fn reset(&mut self) {
        self.history.clear();
        self.history.push(Board::new());
        self.current_move = 0;
        debug!("game reset");
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Board at the current move
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Mark that plays next from the current move
    pub fn next_mark(&self) -> Mark {
        Mark::for_move(self.current_move)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        rules::detect(self.current_board())
    }

    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(win) = rules::detect(board) {
            GameStatus::Winner(win.winner)
        } else if rules::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_mark())
        }
    }

    /// No further move is possible on the displayed board
    pub fn is_over(&self) -> bool {
        !matches!(self.status(), GameStatus::NextPlayer(_))
    }

    /// Place the next mark at `cell` (row-major index 0..9)
    ///
    /// Any snapshot after the current move is discarded before the new board
    /// is appended. Returns the mark that was placed.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn apply_move(&mut self, cell: usize) -> Result<Mark, GameError> {
        let pos = Pos::try_from_index(cell).ok_or(GameError::CellOutOfRange { cell })?;
        self.play(pos)
    }

    /// Same as [`GameState::apply_move`], addressed by position
    pub fn play(&mut self, pos: Pos) -> Result<Mark, GameError> {
        let board = *self.current_board();
        let cell = pos.to_index();

        if !board.is_empty(pos) {
            debug!(cell, "rejected move on occupied cell");
            return Err(GameError::CellOccupied { cell });
        }
        if let Some(winner) = rules::check_winner(&board) {
            debug!(cell, %winner, "rejected move after game end");
            return Err(GameError::GameOver { winner });
        }

        let mark = self.next_mark();
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(board.with_mark(pos, mark));
        self.current_move = self.history.len() - 1;

        debug!(cell, %mark, move_number = self.current_move, discarded, "move applied");
        Ok(mark)
    }

    /// Show the snapshot at `move_index`; history is left untouched
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), GameError> {
        if move_index >= self.history.len() {
            debug!(len = self.history.len(), "rejected jump");
            return Err(GameError::MoveOutOfRange {
                target: move_index,
                len: self.history.len(),
            });
        }
        self.current_move = move_index;
        trace!("jumped");
        Ok(())
    }

    pub fn step_back(&mut self) -> Result<(), GameError> {
        match self.current_move.checked_sub(1) {
            Some(prev) => self.jump_to(prev),
            None => {
                debug!("rejected step back at game start");
                Err(GameError::AtGameStart)
            }
        }
    }

    pub fn step_forward(&mut self) -> Result<(), GameError> {
        self.jump_to(self.current_move + 1)
    }

    /// Flip the move list order
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggled();
        debug!(sort_order = ?self.sort_order, "sort order toggled");
    }

    /// Move list in display order
    pub fn move_list(&self) -> Vec<MoveEntry> {
        move_list(self.history.len(), self.current_move, self.sort_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(game: &mut GameState, cells: &[usize]) {
        for &cell in cells {
            game.apply_move(cell).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_move(), 0);
        assert!(game.current_board().is_board_empty());
        assert_eq!(game.status(), GameStatus::NextPlayer(Mark::X));
        assert_eq!(game.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_marks_alternate() {
        let mut game = GameState::new();
        assert_eq!(game.apply_move(4), Ok(Mark::X));
        assert_eq!(game.apply_move(0), Ok(Mark::O));
        assert_eq!(game.next_mark(), Mark::X);
        assert_eq!(game.current_board().get(Pos::new(1, 1)), Mark::X);
        assert_eq!(game.current_board().get(Pos::new(0, 0)), Mark::O);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = GameState::new();
        play_all(&mut game, &[4]);
        let before = game.clone();

        assert_eq!(game.apply_move(4), Err(GameError::CellOccupied { cell: 4 }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_range_cell_rejected() {
        let mut game = GameState::new();
        assert_eq!(game.apply_move(9), Err(GameError::CellOutOfRange { cell: 9 }));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_move_after_win_rejected() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.status(), GameStatus::Winner(Mark::X));
        assert!(game.is_over());

        let before = game.clone();
        assert_eq!(game.apply_move(8), Err(GameError::GameOver { winner: Mark::X }));
        assert_eq!(game, before);
    }

    #[test]
    fn test_full_board_status() {
        // X O X / X O O / O X X
        let mut game = GameState::new();
        play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(rules::is_draw(game.current_board()));
        assert_eq!(game.status(), GameStatus::Draw);

        // Last move completes the right column on a full board
        let mut game = GameState::new();
        play_all(&mut game, &[0, 1, 2, 3, 5, 4, 7, 6, 8]);
        assert!(game.current_board().is_full());
        assert!(!rules::is_draw(game.current_board()));
        assert_eq!(game.status(), GameStatus::Winner(Mark::X));
    }

    #[test]
    fn test_jump_keeps_history() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 1, 2]);

        game.jump_to(1).unwrap();
        assert_eq!(game.current_move(), 1);
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.next_mark(), Mark::O);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut game = GameState::new();
        play_all(&mut game, &[0]);
        assert_eq!(
            game.jump_to(2),
            Err(GameError::MoveOutOfRange { target: 2, len: 2 })
        );
        assert_eq!(game.current_move(), 1);
    }

    #[test]
    fn test_move_from_past_discards_future() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 1, 2]);
        game.jump_to(1).unwrap();

        assert_eq!(game.apply_move(8), Ok(Mark::O));
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.current_move(), 2);
        assert!(game.current_board().is_empty(Pos::new(0, 1)));
    }

    #[test]
    fn test_move_from_winning_snapshot_of_past_is_allowed() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 3, 1, 4, 2]);
        game.jump_to(4).unwrap();

        assert!(!game.is_over());
        assert_eq!(game.apply_move(8), Ok(Mark::X));
        assert_eq!(game.history().len(), 6);
        assert_eq!(game.status(), GameStatus::NextPlayer(Mark::O));
        assert_eq!(game.apply_move(5), Ok(Mark::O));
        assert_eq!(game.status(), GameStatus::Winner(Mark::O));
        assert_eq!(game.winning_line().unwrap().indices(), [3, 4, 5]);
    }

    #[test]
    fn test_step_back_and_forward() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 1]);

        game.step_back().unwrap();
        assert_eq!(game.current_move(), 1);
        game.step_back().unwrap();
        assert_eq!(game.step_back(), Err(GameError::AtGameStart));
        assert_eq!(game.current_move(), 0);

        game.step_forward().unwrap();
        game.step_forward().unwrap();
        assert_eq!(
            game.step_forward(),
            Err(GameError::MoveOutOfRange { target: 3, len: 3 })
        );
        assert_eq!(game.current_move(), 2);
    }

    #[test]
    fn test_toggle_sort_does_not_touch_game() {
        let mut game = GameState::new();
        play_all(&mut game, &[0, 4]);
        let history = game.history().to_vec();

        game.toggle_sort();
        assert_eq!(game.sort_order(), SortOrder::Descending);
        assert_eq!(game.history(), history.as_slice());
        assert_eq!(game.current_move(), 2);
        assert_eq!(game.move_list()[0].index, 2);
    }

    #[test]
    fn test_reset_keeps_sort_order() {
        let mut game = GameState::with_sort_order(SortOrder::Descending);
        play_all(&mut game, &[0, 4, 8]);
        game.reset();

        assert_eq!(game, GameState::with_sort_order(SortOrder::Descending));
    }
}
