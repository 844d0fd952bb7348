use crate::game::{Action, GameState, Player, Status};

use super::agent::Agent;

/// Strongest opponent: fixed-depth minimax with alpha-beta pruning over pawn
/// moves plus a bounded prefix of legal wall placements. Simulation runs
/// through cloned game states, so search can never corrupt the live game.
pub struct MinimaxAgent {
    depth: u8,
    wall_candidates: usize,
}

const WIN_SCORE: f64 = 1000.0;

impl MinimaxAgent {
    pub fn new(depth: u8, wall_candidates: usize) -> Self {
        MinimaxAgent {
            depth,
            wall_candidates,
        }
    }

    fn candidates(&self, state: &GameState, player: Player) -> Vec<Action> {
        let mut actions: Vec<Action> = state
            .legal_moves(player)
            .into_iter()
            .map(Action::Move)
            .collect();
        if state.pawn(player).walls_remaining > 0 {
            actions.extend(
                state
                    .legal_walls()
                    .into_iter()
                    .take(self.wall_candidates)
                    .map(Action::PlaceWall),
            );
        }
        actions
    }

    /// Static evaluation from `me`'s perspective.
    fn evaluate(state: &GameState, me: Player) -> f64 {
        let opp = me.other();
        let my_dist = state.distance_to_goal(me).unwrap_or(u32::MAX) as f64;
        let opp_dist = state.distance_to_goal(opp).unwrap_or(u32::MAX) as f64;
        let wall_edge = state.pawn(me).walls_remaining as f64
            - state.pawn(opp).walls_remaining as f64;

        let pos = state.pawn(me).position;
        let progress = match me {
            Player::One => pos.y as f64,
            Player::Two => (8 - pos.y) as f64,
        };
        let positional = progress * 2.0 - (pos.x as f64 - 4.0).abs() * 0.5;

        (opp_dist - my_dist) * 10.0 + wall_edge * 2.0 + positional
    }

    fn search(
        &self,
        state: &GameState,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        me: Player,
    ) -> f64 {
        if state.status() == Status::Finished {
            // Deeper remaining depth means a faster win; prefer it.
            return match state.winner() {
                Some(winner) if winner == me => WIN_SCORE + depth as f64,
                Some(_) => -WIN_SCORE - depth as f64,
                None => 0.0,
            };
        }
        if depth == 0 {
            return Self::evaluate(state, me);
        }

        let player = state.current_player();
        let maximizing = player == me;
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for action in self.candidates(state, player) {
            let mut child = state.clone();
            if child.apply(player, action).is_err() {
                continue;
            }
            let score = self.search(&child, depth - 1, alpha, beta, me);
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState, player: Player) -> Action {
        let mut best: Option<(Action, f64)> = None;
        for action in self.candidates(state, player) {
            let mut child = state.clone();
            if child.apply(player, action).is_err() {
                continue;
            }
            let score = self.search(
                &child,
                self.depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
                player,
            );
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((action, score));
            }
        }
        best.expect("no legal actions available").0
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
