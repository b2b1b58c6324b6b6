//! End-to-end game scenarios through the public API.

use tictactoe::{GameError, GameState, GameStatus, Mark, Pos, SortOrder};

fn play(cells: &[usize]) -> GameState {
    let mut game = GameState::new();
    for &cell in cells {
        game.apply_move(cell).unwrap();
    }
    game
}

#[test]
fn diagonal_win_for_x() {
    let game = play(&[0, 1, 4, 2, 8]);

    assert_eq!(game.status(), GameStatus::Winner(Mark::X));
    assert_eq!(game.status().to_string(), "Winner: X");
    let line = game.winning_line().unwrap();
    assert_eq!(line.winner, Mark::X);
    assert_eq!(line.indices(), [0, 4, 8]);
}

#[test]
fn center_taken_by_o_blocks_the_diagonal() {
    // X: 0, 1, 8 / O: 4, 7
    let game = play(&[0, 4, 1, 7, 8]);

    assert_eq!(game.winning_line(), None);
    assert_eq!(game.status(), GameStatus::NextPlayer(Mark::O));
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn full_board_without_line_is_a_draw() {
    // X O X
    // X O O
    // O X X
    let mut game = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw");
    assert!(game.is_over());
    assert_eq!(game.apply_move(0).err(), Some(GameError::CellOccupied { cell: 0 }));
}

#[test]
fn jump_to_start_then_move_discards_the_tail() {
    let mut game = play(&[0, 4, 8]);
    assert_eq!(game.history().len(), 4);

    game.jump_to(0).unwrap();
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.status(), GameStatus::NextPlayer(Mark::X));

    game.apply_move(2).unwrap();
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.current_move(), 1);
    assert_eq!(game.current_board().get(Pos::new(0, 2)), Mark::X);
    assert!(game.current_board().is_empty(Pos::new(0, 0)));
}

#[test]
fn rejected_operations_leave_state_untouched() {
    let mut game = play(&[0, 3, 1, 4, 2]);
    let before = game.clone();

    assert!(game.apply_move(5).is_err());
    assert!(game.apply_move(0).is_err());
    assert!(game.apply_move(42).is_err());
    assert!(game.jump_to(6).is_err());

    assert_eq!(game, before);
}

#[test]
fn move_list_follows_current_move_and_order() {
    let mut game = play(&[0, 4, 8]);
    game.jump_to(1).unwrap();

    let labels: Vec<String> = game.move_list().into_iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            "Go to game start",
            "You are at move #1",
            "Go to move #2",
            "Go to move #3",
        ]
    );

    game.toggle_sort();
    assert_eq!(game.sort_order(), SortOrder::Descending);
    let entries = game.move_list();
    assert_eq!(entries.first().map(|e| e.index), Some(3));
    assert_eq!(entries.last().map(|e| e.label.as_str()), Some("Go to game start"));
    assert_eq!(game.current_move(), 1);
    assert_eq!(game.history().len(), 4);
}

#[test]
fn current_entry_at_start_keeps_start_label() {
    let mut game = play(&[4]);
    game.jump_to(0).unwrap();

    let start = &game.move_list()[0];
    assert!(start.is_current);
    assert_eq!(start.label, "Go to game start");
}
