//! Terminal UI: cursor-driven Quoridor board for local play against another
//! human or a computer opponent.

mod app;
mod game_view;

pub use app::{App, Mode};
