// Scripted games against the engine, no HTTP involved.

mod common;

use mancala_backend::domain::{DomainError, Game, GameConfig, GameState, MoveKind, Winner};

fn restore(board: Vec<u32>, next_player: u8) -> Game {
    Game::restore(GameState {
        id: "scenario".to_string(),
        board,
        next_player,
    })
    .unwrap()
}

#[test]
fn opening_sequence_on_default_board() {
    let mut game = Game::with_id("opening", GameConfig::default()).unwrap();
    assert_eq!(
        game.board().slots(),
        &[6, 6, 6, 6, 6, 6, 0, 6, 6, 6, 6, 6, 6, 0]
    );

    // Six stones from pit 0 end exactly in player 0's store.
    let first = game.pick(0, 0).unwrap();
    assert_eq!(first.kind, MoveKind::ExtraTurn);
    assert!(first.move_again());
    assert_eq!(first.next_player, 0);
    assert_eq!(first.board, vec![0, 7, 7, 7, 7, 7, 1, 6, 6, 6, 6, 6, 6, 0]);
    assert_eq!(first.scores, [36, 36]);
    assert_eq!(first.message(), "Player 0 plays again");

    // Seven stones from pit 1 run past the store into player 1's side.
    let second = game.pick(0, 1).unwrap();
    assert_eq!(second.kind, MoveKind::TurnEnded);
    assert_eq!(second.next_player, 1);
    assert_eq!(second.board, vec![0, 0, 8, 8, 8, 8, 2, 7, 7, 6, 6, 6, 6, 0]);
    assert!(!second.game_ended);
    assert_eq!(second.winner, None);

    // Player 0 may not move twice in a row once the turn passed.
    assert_eq!(game.pick(0, 2), Err(DomainError::NotYourTurn(0)));
    assert_eq!(game.next_player(), 1);
}

#[test]
fn invalid_requests_are_rejected_without_side_effects() {
    let mut game = Game::with_id("bad", GameConfig::default()).unwrap();
    game.pick(0, 0).unwrap();
    let snapshot = game.clone();

    assert_eq!(game.pick(3, 0), Err(DomainError::InvalidPlayer(3)));
    assert_eq!(game.pick(0, 0), Err(DomainError::EmptyPit(0)));
    assert_eq!(game.pick(1, 7), Err(DomainError::NotYourTurn(1)));
    // The turn check runs before pit ownership.
    assert_eq!(game.pick(1, 3), Err(DomainError::NotYourTurn(1)));
    assert_eq!(
        game.pick(0, 8),
        Err(DomainError::WrongPit { player: 0, pit: 8 })
    );
    assert_eq!(game, snapshot);
}

#[test]
fn capture_that_empties_a_side_sweeps_and_names_the_winner() {
    // Three pits per side. Player 0's last stone drops into empty pit 2,
    // capturing it with the single stone opposite in pit 5.
    let mut game = restore(vec![0, 1, 0, 0, 2, 1, 0, 3], 0);

    let outcome = game.pick(0, 1).unwrap();
    assert_eq!(outcome.kind, MoveKind::Capture { captured: 2 });
    assert!(outcome.game_ended);

    // Player 1's two remaining stones in pit 4 go to their own store.
    assert_eq!(outcome.board, vec![0, 0, 0, 2, 0, 0, 0, 5]);
    assert_eq!(outcome.scores, [2, 5]);
    assert_eq!(outcome.winner, Some(Winner::Player(1)));
    assert_eq!(
        outcome.message(),
        "Player 0 captured 2 stones. Turn has ended. Game over, player 1 wins."
    );

    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Winner::Player(1)));
    assert!(matches!(game.pick(1, 4), Err(DomainError::EmptyPit(4))));
}

#[test]
fn extra_turn_into_terminal_board_is_not_reported_as_game_end() {
    let mut game = Game::with_id("tiny", GameConfig::new(1, 1).unwrap()).unwrap();
    assert_eq!(game.board().slots(), &[1, 0, 1, 0]);

    let outcome = game.pick(0, 0).unwrap();
    assert_eq!(outcome.kind, MoveKind::ExtraTurn);
    assert!(!outcome.game_ended);
    assert_eq!(outcome.winner, None);
    assert_eq!(outcome.board, vec![0, 1, 1, 0]);

    // The board itself is terminal; readers see the finished game.
    assert!(game.is_over());
    assert_eq!(game.winner(), Some(Winner::Draw));
    assert_eq!(game.pick(0, 0), Err(DomainError::EmptyPit(0)));
}

#[test]
fn long_sow_laps_the_board_and_skips_opponent_store() {
    // 14 stones in player 1's first pit on a 3-pit board lap twice.
    let mut game = restore(vec![1, 1, 1, 0, 14, 1, 1, 0], 1);

    let outcome = game.pick(1, 4).unwrap();
    // 7 slots are eligible per lap (player 0's store is skipped):
    // 5,6,7,0,1,2,4 twice; the last stone lands back in pit 4.
    assert_eq!(outcome.board, vec![3, 3, 3, 0, 2, 3, 3, 2]);
    assert_eq!(outcome.board[3], 0);
    assert_eq!(outcome.kind, MoveKind::TurnEnded);
    assert_eq!(outcome.next_player, 0);
}
