//! Computer opponents built on the rules engine's legality predicates and
//! shortest-path distances.

mod agent;
mod easy;
mod greedy;
mod minimax;

pub use agent::{Agent, Difficulty};
pub use easy::EasyAgent;
pub use greedy::GreedyAgent;
pub use minimax::MinimaxAgent;
