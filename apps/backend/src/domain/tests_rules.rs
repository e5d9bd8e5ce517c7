use crate::domain::errors::DomainError;
use crate::domain::game::Game;
use crate::domain::outcome::{MoveKind, Winner};
use crate::domain::state::GameState;

fn game_from(board: Vec<u32>, next_player: u8) -> Game {
    Game::restore(GameState {
        id: "rules".to_string(),
        board,
        next_player,
    })
    .unwrap()
}

#[test]
fn landing_in_own_store_grants_extra_turn() {
    let mut game = game_from(vec![6, 6, 6, 6, 6, 6, 0, 6, 6, 6, 6, 6, 6, 0], 0);
    let outcome = game.pick(0, 0).unwrap();
    assert_eq!(outcome.kind, MoveKind::ExtraTurn);
    assert!(outcome.move_again());
    assert!(!outcome.game_ended);
    assert_eq!(game.next_player(), 0);
    assert_eq!(outcome.next_player, 0);
}

#[test]
fn landing_in_empty_own_pit_captures_opposite() {
    let mut game = game_from(vec![1, 0, 6, 6, 6, 6, 0, 6, 6, 6, 6, 6, 6, 0], 0);
    let outcome = game.pick(0, 0).unwrap();
    assert_eq!(outcome.kind, MoveKind::Capture { captured: 7 });
    assert_eq!(
        outcome.board,
        vec![0, 0, 6, 6, 6, 6, 7, 6, 6, 6, 6, 6, 0, 0]
    );
    assert_eq!(game.next_player(), 1);
    assert!(!outcome.game_ended);
}

#[test]
fn capture_with_empty_opposite_banks_the_lone_stone() {
    let mut game = game_from(vec![2, 0, 0, 1, 0, 0, 0, 5, 5, 0, 5, 5, 5, 0], 0);
    let outcome = game.pick(0, 3).unwrap();
    assert_eq!(outcome.kind, MoveKind::Capture { captured: 1 });
    assert_eq!(
        outcome.board,
        vec![2, 0, 0, 0, 0, 0, 1, 5, 5, 0, 5, 5, 5, 0]
    );
}

#[test]
fn landing_in_empty_opponent_pit_does_not_capture() {
    let mut game = game_from(vec![1, 0, 0, 0, 0, 2, 0, 0, 5, 5, 5, 5, 5, 0], 0);
    let outcome = game.pick(0, 5).unwrap();
    assert_eq!(outcome.kind, MoveKind::TurnEnded);
    assert_eq!(
        outcome.board,
        vec![1, 0, 0, 0, 0, 0, 1, 1, 5, 5, 5, 5, 5, 0]
    );
    assert!(!outcome.game_ended);
}

#[test]
fn landing_in_non_empty_own_pit_does_not_capture() {
    let mut game = game_from(vec![1, 3, 0, 0, 0, 0, 0, 4, 4, 4, 4, 4, 4, 0], 0);
    let outcome = game.pick(0, 0).unwrap();
    assert_eq!(outcome.kind, MoveKind::TurnEnded);
    assert_eq!(game.board().stones(1), 4);
}

// Decision: when a move empties a side, every player's leftover pit stones
// are swept into their own store. Scores are unchanged by the sweep.
#[test]
fn game_end_sweeps_remaining_pits_into_owner_store() {
    let mut game = game_from(vec![0, 0, 0, 0, 1, 0, 20, 2, 3, 0, 0, 0, 4, 10], 0);
    let outcome = game.pick(0, 4).unwrap();

    assert_eq!(outcome.kind, MoveKind::Capture { captured: 4 });
    assert!(outcome.game_ended);
    assert_eq!(
        outcome.board,
        vec![0, 0, 0, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 16]
    );
    assert_eq!(outcome.scores, [24, 16]);
    assert_eq!(outcome.winner, Some(Winner::Player(0)));
    assert_eq!(game.next_player(), 1);
    assert!(game.is_over());
}

#[test]
fn finished_game_rejects_further_moves() {
    let mut game = game_from(vec![0, 0, 0, 0, 1, 0, 20, 2, 3, 0, 0, 0, 4, 10], 0);
    game.pick(0, 4).unwrap();
    assert_eq!(game.pick(1, 7), Err(DomainError::EmptyPit(7)));
}

#[test]
fn extra_turn_skips_game_end_check() {
    // Player 0's last stone lands in their store and empties their side.
    let mut game = game_from(vec![0, 0, 0, 0, 0, 1, 10, 3, 3, 3, 3, 3, 3, 5], 0);
    let outcome = game.pick(0, 5).unwrap();
    assert!(outcome.move_again());
    assert!(!outcome.game_ended);
    assert_eq!(outcome.winner, None);
    // The read-only query still reports the terminal board.
    assert!(game.is_over());
}
