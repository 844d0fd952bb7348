use crate::game::{Action, GameState, Player, Position, Wall};

use super::agent::Agent;

/// Intermediate opponent built on shortest-path distances: it blocks when the
/// opponent is close to winning, rushes when it is ahead near its own goal,
/// and otherwise weighs its best step against its best wall.
pub struct GreedyAgent {
    /// Distance at which blocking and rushing kick in.
    block_distance: u32,
}

/// Candidate prefix sizes keep the wall scans bounded.
const BLOCK_CANDIDATES: usize = 15;
const WALL_CANDIDATES: usize = 20;

impl GreedyAgent {
    pub fn new(block_distance: u32) -> Self {
        GreedyAgent { block_distance }
    }

    /// Shortest-path distance the player would have after stepping to `to`.
    fn move_distance(state: &GameState, to: Position, player: Player) -> u32 {
        state
            .board()
            .distance_to_goal(to, player.goal_row())
            .unwrap_or(u32::MAX)
    }

    /// Both players' distances on a scratch board with `wall` added.
    fn distances_with_wall(state: &GameState, wall: Wall) -> (u32, u32) {
        let mut scratch = *state.board();
        scratch.place_wall(wall);
        let dist = |player: Player| {
            scratch
                .distance_to_goal(state.pawn(player).position, player.goal_row())
                .unwrap_or(u32::MAX)
        };
        (dist(Player::One), dist(Player::Two))
    }

    fn best_move(state: &GameState, player: Player) -> (Position, f64) {
        let current = state.distance_to_goal(player).unwrap_or(u32::MAX) as f64;
        state
            .legal_moves(player)
            .into_iter()
            .map(|to| {
                let after = Self::move_distance(state, to, player) as f64;
                let mut score = (current - after) * 10.0;
                score -= (to.x as f64 - 4.0).abs() * 0.5;
                if to.x == 0 || to.x == 8 {
                    score -= 1.0;
                }
                (to, score)
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .expect("no legal moves available")
    }

    fn best_wall(state: &GameState, player: Player, limit: usize) -> Option<(Wall, f64)> {
        let my_dist = state.distance_to_goal(player).unwrap_or(u32::MAX) as f64;
        let opp = player.other();
        let opp_dist = state.distance_to_goal(opp).unwrap_or(u32::MAX) as f64;
        let opp_pos = state.pawn(opp).position;

        state
            .legal_walls()
            .into_iter()
            .take(limit)
            .map(|wall| {
                let (one, two) = Self::distances_with_wall(state, wall);
                let (mine, theirs) = match player {
                    Player::One => (one as f64, two as f64),
                    Player::Two => (two as f64, one as f64),
                };
                let manhattan = wall.x.abs_diff(opp_pos.x) + wall.y.abs_diff(opp_pos.y);
                let score = (theirs - opp_dist) * 5.0
                    - (mine - my_dist) * 3.0
                    - manhattan as f64 * 0.5;
                (wall, score)
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, state: &GameState, player: Player) -> Action {
        let my_dist = state.distance_to_goal(player).unwrap_or(u32::MAX);
        let opp = player.other();
        let opp_dist = state.distance_to_goal(opp).unwrap_or(u32::MAX);
        let walls_left = state.pawn(player).walls_remaining > 0;

        // Block: the opponent is about to win and is ahead of us.
        if walls_left && opp_dist <= self.block_distance && opp_dist < my_dist {
            let blocking = state
                .legal_walls()
                .into_iter()
                .take(BLOCK_CANDIDATES)
                .map(|wall| {
                    let (one, two) = Self::distances_with_wall(state, wall);
                    let theirs = match opp {
                        Player::One => one,
                        Player::Two => two,
                    };
                    (wall, theirs)
                })
                .max_by_key(|&(_, d)| d);
            if let Some((wall, delayed)) = blocking {
                if delayed > opp_dist {
                    return Action::PlaceWall(wall);
                }
            }
        }

        // Rush: we are close and not behind, so just take the best step.
        if my_dist <= self.block_distance && my_dist <= opp_dist {
            return Action::Move(Self::best_move(state, player).0);
        }

        let (to, move_score) = Self::best_move(state, player);
        if walls_left {
            if let Some((wall, wall_score)) = Self::best_wall(state, player, WALL_CANDIDATES) {
                if wall_score > move_score + 1.0 {
                    return Action::PlaceWall(wall);
                }
            }
        }
        Action::Move(to)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
