use std::collections::HashMap;

use rand::Rng;

use crate::game::{Action, ActionError, GameState, Player, Status};

const ROOM_CODE_LEN: usize = 6;
const ROOM_CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a shareable room code: six characters from A-Z and 0-9.
pub fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..ROOM_CODE_LEN)
        .map(|_| ROOM_CODE_CHARSET[rng.random_range(0..ROOM_CODE_CHARSET.len())] as char)
        .collect()
}

/// Why a room rejected a request. Game-rule rejections come straight from
/// the engine; the relay adds only membership and lifecycle checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoomError {
    #[error("room is full")]
    RoomFull,

    #[error("unknown player id")]
    UnknownPlayer,

    #[error("room needs two players to start")]
    NotEnoughPlayers,

    #[error(transparent)]
    Game(#[from] ActionError),
}

/// What an accepted action means for the room's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomEvent {
    StateChanged,
    GameOver { winner: u8 },
}

/// One game session: a room code, the shared engine state, and two seats.
/// All game mutation flows through the engine's legality-gated `apply`, so
/// the relay never re-implements any rule, including turn order.
#[derive(Debug)]
pub struct Room {
    code: String,
    game: GameState,
    seats: [bool; 2],
}

impl Room {
    pub fn new(code: String) -> Self {
        Room {
            code,
            game: GameState::new(),
            seats: [false; 2],
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Take the first free seat, returning its player id.
    pub fn join(&mut self) -> Result<u8, RoomError> {
        match self.seats.iter().position(|&taken| !taken) {
            Some(seat) => {
                self.seats[seat] = true;
                Ok(seat as u8)
            }
            None => Err(RoomError::RoomFull),
        }
    }

    pub fn leave(&mut self, player_id: u8) {
        if let Some(seat) = self.seats.get_mut(player_id as usize) {
            *seat = false;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.seats.iter().all(|&taken| !taken)
    }

    pub fn is_full(&self) -> bool {
        self.seats.iter().all(|&taken| taken)
    }

    /// Start the game once both seats are taken.
    pub fn start(&mut self) -> Result<(), RoomError> {
        if !self.is_full() {
            return Err(RoomError::NotEnoughPlayers);
        }
        self.game.start();
        Ok(())
    }

    /// Apply a member's action through the engine. Turn order, legality,
    /// and wall budgets are all the engine's checks.
    pub fn handle_action(&mut self, player_id: u8, action: Action) -> Result<RoomEvent, RoomError> {
        let seated = self
            .seats
            .get(player_id as usize)
            .copied()
            .unwrap_or(false);
        let player = Player::from_index(player_id as usize);
        let (Some(player), true) = (player, seated) else {
            return Err(RoomError::UnknownPlayer);
        };

        self.game.apply(player, action)?;
        if self.game.status() == Status::Finished {
            let winner = self.game.winner().map(|p| p.index() as u8).unwrap_or(0);
            Ok(RoomEvent::GameOver { winner })
        } else {
            Ok(RoomEvent::StateChanged)
        }
    }
}

/// The relay's session store: room code to room.
#[derive(Debug, Default)]
pub struct RoomManager {
    rooms: HashMap<String, Room>,
}

impl RoomManager {
    pub fn new() -> Self {
        RoomManager {
            rooms: HashMap::new(),
        }
    }

    /// Create a room under a fresh code and return a handle to it.
    pub fn create(&mut self) -> &mut Room {
        let mut code = generate_room_code();
        while self.rooms.contains_key(&code) {
            code = generate_room_code();
        }
        self.rooms
            .entry(code.clone())
            .or_insert_with(|| Room::new(code))
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Room> {
        self.rooms.get_mut(code)
    }

    pub fn remove(&mut self, code: &str) -> Option<Room> {
        self.rooms.remove(code)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
