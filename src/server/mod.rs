//! Real-time relay: one axum websocket endpoint that hosts rooms of two
//! players sharing a single rules-engine state. The relay never re-implements
//! a game rule; every action goes through the engine's gated `apply`.

mod room;
mod wire;

pub use room::{generate_room_code, Room, RoomError, RoomEvent, RoomManager};
pub use wire::{ClientMessage, ServerMessage};

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::{broadcast, mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::ServerError;
use crate::game::Action;

const BROADCAST_CAPACITY: usize = 16;

/// Rooms plus their fan-out channels. Mutated only while holding the lock,
/// so each room has a single writer at a time.
#[derive(Default)]
struct Relay {
    rooms: RoomManager,
    channels: HashMap<String, broadcast::Sender<String>>,
}

type SharedState = Arc<Mutex<Relay>>;

/// Build the relay router: `/ws` for the game protocol, `/health` for probes.
pub fn router() -> Router {
    let state: SharedState = Arc::new(Mutex::new(Relay::default()));
    Router::new()
        .route("/ws", get(ws_handler))
        .route("/health", get(health))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn run(addr: SocketAddr) -> Result<(), ServerError> {
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "relay listening");
    axum::serve(listener, router()).await?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<SharedState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

fn encode(msg: &ServerMessage) -> String {
    serde_json::to_string(msg).expect("server message serializes")
}

/// Forward a room's broadcast stream into this connection's outbox.
fn forward_broadcasts(
    mut rx: broadcast::Receiver<String>,
    out: mpsc::UnboundedSender<String>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Ok(text) = rx.recv().await {
            if out.send(text).is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: SharedState) {
    let (mut sink, mut stream) = socket.split();

    // Single writer task; everything this connection should see goes through
    // the outbox, whether it is a direct reply or a room broadcast.
    let (out_tx, mut out_rx) = mpsc::unbounded_channel::<String>();
    let writer = tokio::spawn(async move {
        while let Some(text) = out_rx.recv().await {
            if sink.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let mut membership: Option<(String, u8)> = None;
    let mut forward: Option<JoinHandle<()>> = None;

    while let Some(Ok(msg)) = stream.next().await {
        let Message::Text(text) = msg else {
            continue;
        };
        let client_msg = match serde_json::from_str::<ClientMessage>(text.as_str()) {
            Ok(msg) => msg,
            Err(err) => {
                warn!(%err, "unparseable client message");
                let _ = out_tx.send(encode(&ServerMessage::Error {
                    message: "malformed message".into(),
                }));
                continue;
            }
        };

        match client_msg {
            ClientMessage::Create => {
                if membership.is_some() {
                    let _ = out_tx.send(encode(&ServerMessage::Error {
                        message: "already in a room".into(),
                    }));
                    continue;
                }
                let mut relay = state.lock().await;
                let room = relay.rooms.create();
                let code = room.code().to_string();
                let player_id = match room.join() {
                    Ok(id) => id,
                    Err(err) => {
                        let _ = out_tx.send(encode(&ServerMessage::Error {
                            message: err.to_string(),
                        }));
                        continue;
                    }
                };
                let (tx, rx) = broadcast::channel(BROADCAST_CAPACITY);
                relay.channels.insert(code.clone(), tx);
                drop(relay);

                forward = Some(forward_broadcasts(rx, out_tx.clone()));
                membership = Some((code.clone(), player_id));
                info!(%code, player_id, "room created");
                let _ = out_tx.send(encode(&ServerMessage::Created {
                    room_code: code,
                    player_id,
                }));
            }

            ClientMessage::Join { room_code } => {
                if membership.is_some() {
                    let _ = out_tx.send(encode(&ServerMessage::Error {
                        message: "already in a room".into(),
                    }));
                    continue;
                }
                let mut relay = state.lock().await;
                let joined = relay
                    .rooms
                    .get_mut(&room_code)
                    .ok_or(RoomError::UnknownPlayer)
                    .and_then(|room| room.join());
                match joined {
                    Ok(player_id) => {
                        let rx = relay
                            .channels
                            .get(&room_code)
                            .map(|tx| (tx.clone(), tx.subscribe()));
                        if let Some((tx, rx)) = rx {
                            let _ = tx.send(encode(&ServerMessage::PlayerJoined { player_id }));
                            forward = Some(forward_broadcasts(rx, out_tx.clone()));
                        }
                        drop(relay);
                        membership = Some((room_code.clone(), player_id));
                        info!(code = %room_code, player_id, "player joined");
                        let _ = out_tx.send(encode(&ServerMessage::Joined {
                            room_code,
                            player_id,
                        }));
                    }
                    Err(err) => {
                        let message = match err {
                            RoomError::UnknownPlayer => "no such room".to_string(),
                            other => other.to_string(),
                        };
                        let _ = out_tx.send(encode(&ServerMessage::Error { message }));
                    }
                }
            }

            ClientMessage::Start { room_code } => {
                let mut relay = state.lock().await;
                let started = relay
                    .rooms
                    .get_mut(&room_code)
                    .map(|room| room.start().map(|()| ServerMessage::state(room.game())));
                match started {
                    Some(Ok(snapshot)) => {
                        if let Some(tx) = relay.channels.get(&room_code) {
                            let _ = tx.send(encode(&ServerMessage::Started));
                            let _ = tx.send(encode(&snapshot));
                        }
                    }
                    Some(Err(err)) => {
                        let _ = out_tx.send(encode(&ServerMessage::Error {
                            message: err.to_string(),
                        }));
                    }
                    None => {
                        let _ = out_tx.send(encode(&ServerMessage::Error {
                            message: "no such room".into(),
                        }));
                    }
                }
            }

            ClientMessage::Move {
                room_code,
                player_id,
                position,
            } => {
                apply_action(
                    &state,
                    &out_tx,
                    &room_code,
                    player_id,
                    Action::Move(position),
                )
                .await;
            }

            ClientMessage::Wall {
                room_code,
                player_id,
                wall,
            } => {
                apply_action(
                    &state,
                    &out_tx,
                    &room_code,
                    player_id,
                    Action::PlaceWall(wall),
                )
                .await;
            }
        }
    }

    // Disconnect: vacate the seat and close the room once it empties.
    if let Some((code, player_id)) = membership {
        let mut relay = state.lock().await;
        if let Some(room) = relay.rooms.get_mut(&code) {
            room.leave(player_id);
            if room.is_empty() {
                relay.rooms.remove(&code);
                relay.channels.remove(&code);
                info!(%code, "room closed");
            }
        }
    }
    if let Some(task) = forward {
        task.abort();
    }
    writer.abort();
}

/// Run one game action through its room, broadcasting the resulting state on
/// success and replying with the rejection reason otherwise.
async fn apply_action(
    state: &SharedState,
    out_tx: &mpsc::UnboundedSender<String>,
    room_code: &str,
    player_id: u8,
    action: Action,
) {
    let mut relay = state.lock().await;
    let Some(room) = relay.rooms.get_mut(room_code) else {
        let _ = out_tx.send(encode(&ServerMessage::Error {
            message: "no such room".into(),
        }));
        return;
    };

    match room.handle_action(player_id, action) {
        Ok(event) => {
            let snapshot = ServerMessage::state(room.game());
            if let Some(tx) = relay.channels.get(room_code) {
                let _ = tx.send(encode(&snapshot));
                if let RoomEvent::GameOver { winner } = event {
                    info!(code = %room_code, winner, "game over");
                    let _ = tx.send(encode(&ServerMessage::GameOver { winner }));
                }
            }
        }
        Err(err) => {
            let _ = out_tx.send(encode(&ServerMessage::Error {
                message: err.to_string(),
            }));
        }
    }
}
