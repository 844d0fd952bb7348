//! Relay room logic exercised without sockets: create, join, start, play to
//! completion, and the wire snapshots a client would receive along the way.

use quoridor::game::{Action, ActionError, Player, Position, Status, Wall};
use quoridor::server::{RoomError, RoomEvent, RoomManager, ServerMessage};

fn full_room(manager: &mut RoomManager) -> String {
    let room = manager.create();
    let code = room.code().to_string();
    assert_eq!(room.join(), Ok(0));
    assert_eq!(room.join(), Ok(1));
    code
}

#[test]
fn create_join_start_flow() {
    let mut manager = RoomManager::new();
    let code = full_room(&mut manager);

    let room = manager.get_mut(&code).unwrap();
    assert_eq!(room.game().status(), Status::Waiting);
    room.start().unwrap();
    assert_eq!(room.game().status(), Status::Playing);
    assert_eq!(room.game().current_player(), Player::One);
}

#[test]
fn third_join_is_rejected() {
    let mut manager = RoomManager::new();
    let code = full_room(&mut manager);
    let room = manager.get_mut(&code).unwrap();
    assert_eq!(room.join(), Err(RoomError::RoomFull));
}

#[test]
fn actions_flow_through_the_engine() {
    let mut manager = RoomManager::new();
    let code = full_room(&mut manager);
    let room = manager.get_mut(&code).unwrap();
    room.start().unwrap();

    // Wrong seat first.
    assert_eq!(
        room.handle_action(1, Action::Move(Position::new(4, 7))),
        Err(RoomError::Game(ActionError::NotYourTurn))
    );

    assert_eq!(
        room.handle_action(0, Action::Move(Position::new(4, 1))),
        Ok(RoomEvent::StateChanged)
    );
    assert_eq!(
        room.handle_action(1, Action::PlaceWall(Wall::vertical(4, 3))),
        Ok(RoomEvent::StateChanged)
    );
    assert_eq!(room.game().pawn(Player::Two).walls_remaining, 9);
}

#[test]
fn state_snapshot_matches_the_room() {
    let mut manager = RoomManager::new();
    let code = full_room(&mut manager);
    let room = manager.get_mut(&code).unwrap();
    room.start().unwrap();
    room.handle_action(0, Action::Move(Position::new(4, 1)))
        .unwrap();
    room.handle_action(1, Action::PlaceWall(Wall::horizontal(2, 5)))
        .unwrap();

    match ServerMessage::state(room.game()) {
        ServerMessage::State {
            current_player,
            positions,
            walls_remaining,
            walls,
        } => {
            assert_eq!(current_player, 0);
            assert_eq!(positions, [Position::new(4, 1), Position::new(4, 8)]);
            assert_eq!(walls_remaining, [10, 9]);
            assert_eq!(walls, vec![Wall::horizontal(2, 5)]);
        }
        other => panic!("expected state message, got {:?}", other),
    }
}

#[test]
fn game_over_event_names_the_winner() {
    let mut manager = RoomManager::new();
    let code = full_room(&mut manager);
    let room = manager.get_mut(&code).unwrap();
    room.start().unwrap();

    // Player One walks the center file; Player Two shuffles along the top
    // row out of the way.
    let script: &[(u8, (u8, u8))] = &[
        (0, (4, 1)),
        (1, (3, 8)),
        (0, (4, 2)),
        (1, (2, 8)),
        (0, (4, 3)),
        (1, (1, 8)),
        (0, (4, 4)),
        (1, (0, 8)),
        (0, (4, 5)),
        (1, (1, 8)),
        (0, (4, 6)),
        (1, (0, 8)),
        (0, (4, 7)),
        (1, (1, 8)),
    ];
    for &(seat, (x, y)) in script {
        assert_eq!(
            room.handle_action(seat, Action::Move(Position::new(x, y))),
            Ok(RoomEvent::StateChanged)
        );
    }

    assert_eq!(
        room.handle_action(0, Action::Move(Position::new(4, 8))),
        Ok(RoomEvent::GameOver { winner: 0 })
    );
    assert_eq!(room.game().status(), Status::Finished);

    // The room refuses anything further.
    assert_eq!(
        room.handle_action(1, Action::Move(Position::new(0, 8))),
        Err(RoomError::Game(ActionError::NotPlaying))
    );
}

#[test]
fn empty_room_can_be_closed() {
    let mut manager = RoomManager::new();
    let code = full_room(&mut manager);
    let room = manager.get_mut(&code).unwrap();
    room.leave(0);
    assert!(!room.is_empty());
    room.leave(1);
    assert!(room.is_empty());
    manager.remove(&code);
    assert!(manager.get_mut(&code).is_none());
    assert!(manager.is_empty());
}
