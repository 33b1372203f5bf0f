#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    #[error("Not enough seeds: {needed} episodes requested, {supplied} seeds supplied")]
    InsufficientSeeds { needed: usize, supplied: usize },
    #[error("Episode {episode}: category '{category}' missing from simulation result")]
    MissingCategory { episode: usize, category: String },
    #[error("Episode {episode}: category '{category}' has no recorded values")]
    EmptyCategory { episode: usize, category: String },
    #[error(transparent)]
    Simulation(#[from] anyhow::Error),
}
