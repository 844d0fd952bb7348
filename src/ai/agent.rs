use crate::config::AiConfig;
use crate::game::{Action, GameState, Player};

/// Universal interface for all computer opponents.
///
/// Agents are pure consumers of the rules engine: they read the state through
/// its public predicates and return an action that those predicates accept.
pub trait Agent {
    /// Select an action for `player` in the given state. The state is
    /// guaranteed to be in progress with at least one legal move available.
    fn select_action(&mut self, state: &GameState, player: Player) -> Action;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Opponent strength, mapped to a concrete agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Build the agent for this difficulty.
    pub fn agent(self, config: &AiConfig) -> Box<dyn Agent> {
        match self {
            Difficulty::Easy => Box::new(super::EasyAgent::new()),
            Difficulty::Medium => Box::new(super::GreedyAgent::new(config.block_distance)),
            Difficulty::Hard => Box::new(super::MinimaxAgent::new(
                config.search_depth,
                config.wall_candidates,
            )),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}
