pub mod episode_stats;
pub mod error;
pub mod runner;
pub mod simulator;

pub use error::EvalError;
pub use runner::{run_episodes, simulate_policy, summarize_episode};
pub use simulator::PolicySimulator;
