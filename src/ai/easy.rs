use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Action, GameState, Player};

use super::agent::Agent;

/// Beginner opponent: usually takes the move with the best forward progress
/// (with enough random noise to be beatable), and occasionally burns a wall
/// on a random legal placement.
pub struct EasyAgent {
    rng: StdRng,
}

const RANDOM_WALL_CHANCE: f64 = 0.3;

impl EasyAgent {
    pub fn new() -> Self {
        EasyAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests.
    pub fn with_seed(seed: u64) -> Self {
        EasyAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EasyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for EasyAgent {
    fn select_action(&mut self, state: &GameState, player: Player) -> Action {
        if state.pawn(player).walls_remaining > 0
            && self.rng.random::<f64>() < RANDOM_WALL_CHANCE
        {
            let walls = state.legal_walls();
            if !walls.is_empty() {
                let idx = self.rng.random_range(0..walls.len());
                return Action::PlaceWall(walls[idx]);
            }
        }

        let moves = state.legal_moves(player);
        assert!(!moves.is_empty(), "no legal moves available");
        let goal = player.goal_row();
        let best = moves
            .into_iter()
            .map(|to| {
                let progress = -(to.y.abs_diff(goal) as f64);
                let noise = self.rng.random_range(-1.0..1.0);
                (to, progress + noise)
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(to, _)| to)
            .unwrap();
        Action::Move(best)
    }

    fn name(&self) -> &str {
        "Easy"
    }
}
