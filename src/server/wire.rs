use serde::{Deserialize, Serialize};

use crate::game::{Action, GameState, Position, Wall};

/// Messages a client may send over the websocket. The JSON shape keeps the
/// de facto field names of the browser client: camelCase keys, a `type` tag,
/// `position: {x, y}` and `wall: {x, y, orientation}` payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    Create,
    #[serde(rename_all = "camelCase")]
    Join { room_code: String },
    #[serde(rename_all = "camelCase")]
    Start { room_code: String },
    #[serde(rename_all = "camelCase")]
    Move {
        room_code: String,
        player_id: u8,
        position: Position,
    },
    #[serde(rename_all = "camelCase")]
    Wall {
        room_code: String,
        player_id: u8,
        wall: Wall,
    },
}

/// Messages the relay sends back. Every accepted action produces a `state`
/// broadcast to the whole room; errors go only to the offending client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    #[serde(rename_all = "camelCase")]
    Created { room_code: String, player_id: u8 },
    #[serde(rename_all = "camelCase")]
    Joined { room_code: String, player_id: u8 },
    #[serde(rename_all = "camelCase")]
    PlayerJoined { player_id: u8 },
    Started,
    #[serde(rename_all = "camelCase")]
    State {
        current_player: u8,
        positions: [Position; 2],
        walls_remaining: [u8; 2],
        walls: Vec<Wall>,
    },
    #[serde(rename_all = "camelCase")]
    GameOver { winner: u8 },
    #[serde(rename_all = "camelCase")]
    Error { message: String },
}

impl ServerMessage {
    /// Snapshot the relay-visible parts of a game into a `state` message.
    pub fn state(game: &GameState) -> Self {
        use crate::game::Player;
        let walls = game
            .history()
            .iter()
            .filter_map(|record| match record.action {
                Action::PlaceWall(wall) => Some(wall),
                Action::Move(_) => None,
            })
            .collect();
        ServerMessage::State {
            current_player: game.current_player().index() as u8,
            positions: [
                game.pawn(Player::One).position,
                game.pawn(Player::Two).position,
            ],
            walls_remaining: [
                game.pawn(Player::One).walls_remaining,
                game.pawn(Player::Two).walls_remaining,
            ],
            walls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Orientation;

    #[test]
    fn test_client_move_round_trip_field_names() {
        let json = r#"{"type":"move","roomCode":"AB12CD","playerId":0,"position":{"x":4,"y":1}}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Move {
                room_code: "AB12CD".into(),
                player_id: 0,
                position: Position::new(4, 1),
            }
        );
        assert_eq!(serde_json::to_string(&msg).unwrap(), json);
    }

    #[test]
    fn test_client_wall_orientation_is_lowercase() {
        let json =
            r#"{"type":"wall","roomCode":"AB12CD","playerId":1,"wall":{"x":3,"y":4,"orientation":"horizontal"}}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Wall {
                room_code: "AB12CD".into(),
                player_id: 1,
                wall: Wall::horizontal(3, 4),
            }
        );
        let back = serde_json::to_string(&msg).unwrap();
        assert!(back.contains(r#""orientation":"horizontal""#));
        let vertical = serde_json::to_string(&Orientation::Vertical).unwrap();
        assert_eq!(vertical, r#""vertical""#);
    }

    #[test]
    fn test_server_message_tags() {
        let created = ServerMessage::Created {
            room_code: "XY99ZZ".into(),
            player_id: 0,
        };
        let json = serde_json::to_string(&created).unwrap();
        assert!(json.contains(r#""type":"created""#));
        assert!(json.contains(r#""roomCode":"XY99ZZ""#));

        let over = serde_json::to_string(&ServerMessage::GameOver { winner: 1 }).unwrap();
        assert!(over.contains(r#""type":"gameOver""#));
    }

    #[test]
    fn test_state_snapshot_tracks_placed_walls() {
        use crate::game::{Action, GameState, Player};
        let mut game = GameState::new();
        game.start();
        game.apply(Player::One, Action::PlaceWall(Wall::vertical(2, 3)))
            .unwrap();
        let msg = ServerMessage::state(&game);
        match msg {
            ServerMessage::State {
                current_player,
                walls,
                walls_remaining,
                ..
            } => {
                assert_eq!(current_player, 1);
                assert_eq!(walls, vec![Wall::vertical(2, 3)]);
                assert_eq!(walls_remaining, [9, 10]);
            }
            other => panic!("expected state message, got {:?}", other),
        }
    }
}
