use std::collections::BTreeMap;

/// Output of one simulated episode, as produced by the external simulator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationResult {
    /// Per-week counts keyed by category name ("dead", "infected", ...).
    pub categories: BTreeMap<String, Vec<f64>>,
    /// Per-week confinement decision, 0 = open and 1 = confined.
    pub policy: Vec<u32>,
    /// Per-step rewards.
    pub rewards: Vec<f64>,
}

impl SimulationResult {
    pub fn new(categories: BTreeMap<String, Vec<f64>>, policy: Vec<u32>, rewards: Vec<f64>) -> Self {
        Self {
            categories,
            policy,
            rewards,
        }
    }

    pub fn category(&self, name: &str) -> Option<&[f64]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    #[inline]
    pub fn confined_weeks(&self) -> u64 {
        self.policy.iter().map(|&w| u64::from(w)).sum()
    }

    #[inline]
    pub fn cumulative_reward(&self) -> f64 {
        // Fold from +0.0: `Sum` for f64 starts at -0.0.
        self.rewards.iter().fold(0.0, |acc, r| acc + r)
    }
}

/// Reduced statistics for a single episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    pub seed: u64,
    pub days_confined: u64,
    pub total_dead: f64,
    pub cum_reward: f64,
}
