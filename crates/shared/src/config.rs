// Baseline evaluation parameters
pub const DEFAULT_N_WEEKS: u32 = 30;
pub const DEFAULT_N_EPISODES: usize = 5;
pub const DAYS_PER_WEEK: u64 = 7;
pub const DEAD_CATEGORY: &str = "dead";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalConfig {
    /// Horizon handed to the simulator for every episode.
    pub n_weeks: u32,
    pub n_episodes: usize,
    /// One seed per episode, consumed by position. Must hold at least
    /// `n_episodes` entries; there is no implicit seed.
    pub seeds: Vec<u64>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            n_weeks: DEFAULT_N_WEEKS,
            n_episodes: DEFAULT_N_EPISODES,
            seeds: Vec::new(),
        }
    }
}

impl EvalConfig {
    /// One episode per seed, default horizon.
    pub fn for_seeds(seeds: Vec<u64>) -> Self {
        Self {
            n_episodes: seeds.len(),
            seeds,
            ..Self::default()
        }
    }

    pub fn with_seeds(mut self, seeds: Vec<u64>) -> Self {
        self.seeds = seeds;
        self
    }

    pub fn with_n_episodes(mut self, n_episodes: usize) -> Self {
        self.n_episodes = n_episodes;
        self
    }

    pub fn with_n_weeks(mut self, n_weeks: u32) -> Self {
        self.n_weeks = n_weeks;
        self
    }
}

/// Evenly spaced seeds: `start`, `start + stride`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSchedule {
    pub start: u64,
    pub stride: u64,
}

impl Default for SeedSchedule {
    fn default() -> Self {
        Self { start: 0, stride: 1 }
    }
}

impl SeedSchedule {
    pub fn new(start: u64, stride: u64) -> Self {
        Self { start, stride }
    }

    pub fn seed_at(&self, index: u64) -> u64 {
        self.start.wrapping_add(index.wrapping_mul(self.stride))
    }

    pub fn generate(&self, n: usize) -> Vec<u64> {
        (0..n as u64).map(|i| self.seed_at(i)).collect()
    }
}
