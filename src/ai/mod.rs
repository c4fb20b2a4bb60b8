//! Move-selecting agents: the negamax search engine and a random baseline.

mod agent;
mod negamax;
mod random;

pub use agent::Agent;
pub use negamax::NegamaxAgent;
pub use random::RandomAgent;
