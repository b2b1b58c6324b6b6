//! Draw detection

use crate::board::Board;

use super::win::detect;

/// Board is full and nobody completed a line
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && detect(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Mark, Pos};

    fn fill(marks: [Mark; 9]) -> Board {
        Pos::all().zip(marks).fold(Board::new(), |b, (p, m)| b.with_mark(p, m))
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        use Mark::{O, X};
        // X O X
        // X O O
        // O X X
        let board = fill([X, O, X, X, O, O, O, X, X]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        use Mark::{O, X};
        let board = fill([X, X, X, O, O, X, X, O, O]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_is_not_draw() {
        assert!(!is_draw(&Board::new()));
    }
}
