//! Core Quoridor rules engine: board and wall representation, player types,
//! and the legality-gated game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Orientation, Position, Wall, BOARD_SIZE, WALLS_PER_PLAYER};
pub use player::Player;
pub use state::{Action, ActionError, GameState, MoveRecord, Pawn, Status};
