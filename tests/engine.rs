//! End-to-end rules scenarios exercised through the public API.

use quoridor::game::{
    Action, ActionError, GameState, Player, Position, Status, Wall, BOARD_SIZE, WALLS_PER_PLAYER,
};

fn playing() -> GameState {
    let mut state = GameState::new();
    state.start();
    state
}

fn apply_moves(state: &mut GameState, script: &[(Player, (u8, u8))]) {
    for &(player, (x, y)) in script {
        state
            .apply(player, Action::Move(Position::new(x, y)))
            .unwrap();
    }
}

#[test]
fn wall_bounds_contract_on_empty_board() {
    let state = playing();
    for x in 0..BOARD_SIZE {
        for y in 0..BOARD_SIZE {
            let h_legal = state.is_legal_wall(Wall::horizontal(x, y));
            assert_eq!(
                h_legal,
                x <= 7 && (1..=8).contains(&y),
                "horizontal wall at ({x},{y})"
            );
            let v_legal = state.is_legal_wall(Wall::vertical(x, y));
            assert_eq!(
                v_legal,
                (1..=8).contains(&x) && y <= 7,
                "vertical wall at ({x},{y})"
            );
        }
    }
}

#[test]
fn empty_board_has_128_wall_placements() {
    // 8 x 8 anchors per orientation.
    assert_eq!(playing().legal_walls().len(), 128);
}

#[test]
fn jump_precedence_over_the_course_of_a_game() {
    let mut state = playing();
    apply_moves(
        &mut state,
        &[
            (Player::One, (4, 1)),
            (Player::Two, (4, 7)),
            (Player::One, (4, 2)),
            (Player::Two, (4, 6)),
            (Player::One, (4, 3)),
            (Player::Two, (4, 5)),
            (Player::One, (4, 4)),
        ],
    );

    // Straight jump is open, so the diagonals are not offered.
    let moves = state.legal_moves(Player::Two);
    assert!(moves.contains(&Position::new(4, 3)));
    assert!(!moves.contains(&Position::new(3, 4)));
    assert!(!moves.contains(&Position::new(5, 4)));

    // Sealing the cell behind Player One flips the offer to the diagonals.
    state
        .apply(Player::Two, Action::PlaceWall(Wall::horizontal(3, 4)))
        .unwrap();
    state
        .apply(Player::One, Action::Move(Position::new(3, 4)))
        .unwrap();
    // One sidestepped; Two at (4,5) can now just walk forward.
    assert!(state.is_legal_move(Player::Two, Position::new(4, 4)));
}

#[test]
fn blocked_straight_jump_offers_exactly_the_two_diagonals() {
    let mut state = playing();
    apply_moves(
        &mut state,
        &[
            (Player::One, (4, 1)),
            (Player::Two, (4, 7)),
            (Player::One, (4, 2)),
            (Player::Two, (4, 6)),
            (Player::One, (4, 3)),
            (Player::Two, (4, 5)),
            (Player::One, (4, 4)),
        ],
    );
    state
        .apply(Player::Two, Action::PlaceWall(Wall::horizontal(3, 6)))
        .unwrap();

    let moves = state.legal_moves(Player::One);
    assert!(!moves.contains(&Position::new(4, 6)));
    assert!(moves.contains(&Position::new(3, 5)));
    assert!(moves.contains(&Position::new(5, 5)));
    // The occupied cell itself is never offered.
    assert!(!moves.contains(&Position::new(4, 5)));
}

#[test]
fn walls_reroute_but_never_strand() {
    let mut state = playing();
    // A staircase of walls across the middle; every placement must keep
    // both players connected to their goal rows.
    let walls = [
        Wall::horizontal(0, 4),
        Wall::horizontal(2, 4),
        Wall::horizontal(4, 4),
        Wall::horizontal(6, 4),
        Wall::vertical(8, 3),
    ];
    let mut shuffle = 0;
    for wall in walls {
        state
            .apply(state.current_player(), Action::PlaceWall(wall))
            .unwrap();
        assert!(state.has_path_to_goal(Player::One));
        assert!(state.has_path_to_goal(Player::Two));
        // Alternate a pawn move to hand the turn back.
        let to = if shuffle % 2 == 0 {
            Position::new(3, 8)
        } else {
            Position::new(4, 8)
        };
        state
            .apply(state.current_player(), Action::Move(to))
            .unwrap();
        shuffle += 1;
    }

    // The whole row 4 boundary is nearly sealed: the only crossing left is
    // between the last wall and the right edge, which the path rule kept.
    let dist = state.distance_to_goal(Player::One).unwrap();
    assert!(dist > 8, "path must be longer than the unobstructed 8");
}

#[test]
fn wall_counts_only_decrease_and_gate_placements() {
    let mut state = playing();
    state
        .apply(Player::One, Action::PlaceWall(Wall::horizontal(0, 4)))
        .unwrap();
    state
        .apply(Player::Two, Action::PlaceWall(Wall::horizontal(2, 4)))
        .unwrap();
    assert_eq!(state.pawn(Player::One).walls_remaining, WALLS_PER_PLAYER - 1);
    assert_eq!(state.pawn(Player::Two).walls_remaining, WALLS_PER_PLAYER - 1);

    // A rejected placement does not spend a wall.
    let result = state.apply(Player::One, Action::PlaceWall(Wall::horizontal(0, 4)));
    assert_eq!(result, Err(ActionError::IllegalWall));
    assert_eq!(state.pawn(Player::One).walls_remaining, WALLS_PER_PLAYER - 1);
}

#[test]
fn race_to_the_goal_row_ends_the_game() {
    let mut state = playing();
    apply_moves(
        &mut state,
        &[
            (Player::One, (4, 1)),
            (Player::Two, (4, 7)),
            (Player::One, (4, 2)),
            (Player::Two, (4, 6)),
            (Player::One, (4, 3)),
            (Player::Two, (4, 5)),
            (Player::One, (4, 4)),
            // Two jumps straight over One.
            (Player::Two, (4, 3)),
            (Player::One, (3, 4)),
            (Player::Two, (4, 2)),
            (Player::One, (3, 5)),
            (Player::Two, (4, 1)),
            (Player::One, (3, 6)),
            (Player::Two, (4, 0)),
        ],
    );
    assert_eq!(state.status(), Status::Finished);
    assert_eq!(state.winner(), Some(Player::Two));
    // No further actions are accepted.
    let result = state.apply(Player::One, Action::Move(Position::new(3, 7)));
    assert_eq!(result, Err(ActionError::NotPlaying));
}
