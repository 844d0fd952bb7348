//! # Quoridor
//!
//! A Quoridor implementation: rules engine with path-connectivity wall
//! validation, computer opponents, a Ratatui terminal client, and a
//! websocket relay for two-player games over the network.
//!
//! ## Modules
//!
//! - [`game`] — Core rules: board, walls, players, legality-gated state
//! - [`ai`] — Agent trait and the easy/medium/hard opponents
//! - [`server`] — Axum websocket relay with room codes
//! - [`ui`] — Terminal UI for local play
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod server;
pub mod ui;
