use crate::outcome::EpisodeSummary;

/// Per-episode statistics stored as parallel sequences, index-aligned by episode.
///
/// All four sequences always have the same length. Use [`AggregateOutput::push`]
/// rather than extending the fields one by one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateOutput {
    pub seeds: Vec<u64>,
    pub days_confined: Vec<u64>,
    pub total_dead: Vec<f64>,
    pub cum_rewards: Vec<f64>,
}

impl AggregateOutput {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            seeds: Vec::with_capacity(n),
            days_confined: Vec::with_capacity(n),
            total_dead: Vec::with_capacity(n),
            cum_rewards: Vec::with_capacity(n),
        }
    }

    pub fn from_summaries(summaries: Vec<EpisodeSummary>) -> Self {
        let mut out = Self::with_capacity(summaries.len());
        for summary in summaries {
            out.push(summary);
        }
        out
    }

    pub fn push(&mut self, summary: EpisodeSummary) {
        self.seeds.push(summary.seed);
        self.cum_rewards.push(summary.cum_reward);
        self.total_dead.push(summary.total_dead);
        self.days_confined.push(summary.days_confined);
    }

    pub fn n_episodes(&self) -> usize {
        let n = self.days_confined.len();
        debug_assert!(
            self.seeds.len() == n && self.total_dead.len() == n && self.cum_rewards.len() == n,
            "misaligned episode sequences: seeds={} days_confined={} total_dead={} cum_rewards={}",
            self.seeds.len(),
            n,
            self.total_dead.len(),
            self.cum_rewards.len(),
        );
        n
    }

    pub fn is_empty(&self) -> bool {
        self.days_confined.is_empty()
    }

    pub fn episode(&self, index: usize) -> Option<EpisodeSummary> {
        Some(EpisodeSummary {
            seed: *self.seeds.get(index)?,
            days_confined: *self.days_confined.get(index)?,
            total_dead: *self.total_dead.get(index)?,
            cum_reward: *self.cum_rewards.get(index)?,
        })
    }

    pub fn summaries(&self) -> impl Iterator<Item = EpisodeSummary> + '_ {
        (0..self.n_episodes()).filter_map(move |i| self.episode(i))
    }

    pub fn mean_days_confined(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.days_confined.iter().sum::<u64>() as f64 / self.n_episodes() as f64
        }
    }

    pub fn mean_dead(&self) -> f64 {
        mean(&self.total_dead)
    }

    pub fn mean_reward(&self) -> f64 {
        mean(&self.cum_rewards)
    }

    /// Days confined, total dead and cumulative rewards, in that order.
    pub fn into_parts(self) -> (Vec<u64>, Vec<f64>, Vec<f64>) {
        (self.days_confined, self.total_dead, self.cum_rewards)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
