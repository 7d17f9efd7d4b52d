//! Tests for a session played over several rounds.

use shannon_switch::{
    Coord, GameConfig, GameInProgress, GameResult, Move, MoveError, Player, Session, Status,
};

fn place_all(session: &mut Session, cells: &[(usize, usize)]) -> Status {
    let mut status = session.status();
    for &(row, col) in cells {
        status = session
            .place(Coord::new(row, col))
            .unwrap_or_else(|e| panic!("move ({}, {}) refused: {}", row, col, e));
    }
    status
}

#[test]
fn test_players_alternate_from_x() {
    let mut session = Session::default();
    assert_eq!(session.status(), Status::Turn(Player::X));
    place_all(&mut session, &[(3, 3)]);
    assert_eq!(session.status(), Status::Turn(Player::O));
    place_all(&mut session, &[(0, 0)]);
    assert_eq!(session.status(), Status::Turn(Player::X));

    let players: Vec<Player> = session.history().iter().map(|m| m.player).collect();
    assert_eq!(players, vec![Player::X, Player::O]);
}

#[test]
fn test_o_wins_top_to_bottom() {
    let mut session = Session::default();
    // X stays right of centre while O builds column 2 down the board.
    let moves = [
        (0, 6), (0, 2),
        (1, 6), (1, 2),
        (2, 6), (2, 2),
        (3, 5), (3, 2),
        (4, 4), (4, 2),
        (0, 4), (5, 2),
        (1, 4),
    ];
    assert_eq!(place_all(&mut session, &moves), Status::Turn(Player::O));
    assert_eq!(session.place(Coord::new(6, 2)), Ok(Status::Won(Player::O)));

    let path = session.winning_path().expect("O connected");
    assert_eq!(path.player(), Player::O);
    assert_eq!(path.cells().first(), Some(&Coord::new(0, 2)));
    assert_eq!(path.cells().last(), Some(&Coord::new(6, 2)));
    assert_eq!(session.scores().of(Player::O), 1);
}

#[test]
fn test_finished_round_refuses_moves_until_reset() {
    let mut session = Session::new(GameConfig::with_size(3));
    assert_eq!(
        place_all(&mut session, &[(1, 0), (0, 0), (1, 1), (0, 1), (1, 2)]),
        Status::Won(Player::X)
    );
    assert_eq!(session.place(Coord::new(2, 2)), Err(MoveError::GameOver));
    assert!(session.is_finished());

    session.reset();
    assert!(!session.is_finished());
    assert_eq!(session.status(), Status::Turn(Player::X));
    assert!(session.place(Coord::new(2, 2)).is_ok());
}

#[test]
fn test_scores_accumulate_across_rounds() {
    let mut session = Session::new(GameConfig::with_size(2));
    // X: (0,0) then (0,1) spans left to right.
    assert_eq!(
        place_all(&mut session, &[(0, 0), (1, 1), (0, 1)]),
        Status::Won(Player::X)
    );
    session.reset();
    // X stacks column 0, so O's column 1 spans top to bottom.
    assert_eq!(
        place_all(&mut session, &[(0, 0), (0, 1), (1, 0), (1, 1)]),
        Status::Won(Player::O)
    );
    let scores = session.scores();
    assert_eq!((scores.x, scores.o), (1, 1));
}

#[test]
fn test_replay_matches_session() {
    let config = GameConfig::with_size(3);
    let mut session = Session::new(config.clone());
    place_all(&mut session, &[(0, 0), (2, 2), (1, 1)]);

    match GameInProgress::replay(&config, session.history()).expect("legal history") {
        GameResult::InProgress(game) => {
            assert_eq!(game.grid(), session.grid());
            assert_eq!(game.to_move(), Player::O);
        }
        GameResult::Finished(_) => panic!("round should still be running"),
    }
}

#[test]
fn test_replay_rejects_out_of_turn_history() {
    let config = GameConfig::with_size(3);
    let moves = [Move::at(Player::X, 0, 0), Move::at(Player::X, 1, 1)];
    assert!(matches!(
        GameInProgress::replay(&config, &moves),
        Err(MoveError::WrongPlayer(Player::X))
    ));
}
