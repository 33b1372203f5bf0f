use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

fn enabled() -> bool {
    static ENABLED: OnceLock<bool> = OnceLock::new();
    *ENABLED.get_or_init(|| std::env::var_os("EPI_POLICY_EVAL_STATS").is_some())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalStatsSnapshot {
    pub episodes_simulated: u64,
    pub weeks_observed: u64,
    pub reward_steps: u64,
}

static EPISODES_SIMULATED: AtomicU64 = AtomicU64::new(0);
static WEEKS_OBSERVED: AtomicU64 = AtomicU64::new(0);
static REWARD_STEPS: AtomicU64 = AtomicU64::new(0);

pub fn reset() {
    EPISODES_SIMULATED.store(0, Ordering::Relaxed);
    WEEKS_OBSERVED.store(0, Ordering::Relaxed);
    REWARD_STEPS.store(0, Ordering::Relaxed);
}

pub fn snapshot_if_enabled() -> Option<EvalStatsSnapshot> {
    if !enabled() {
        return None;
    }
    Some(EvalStatsSnapshot {
        episodes_simulated: EPISODES_SIMULATED.load(Ordering::Relaxed),
        weeks_observed: WEEKS_OBSERVED.load(Ordering::Relaxed),
        reward_steps: REWARD_STEPS.load(Ordering::Relaxed),
    })
}

#[inline]
pub(crate) fn record_episode(weeks: usize, reward_steps: usize) {
    if enabled() {
        EPISODES_SIMULATED.fetch_add(1, Ordering::Relaxed);
        WEEKS_OBSERVED.fetch_add(weeks as u64, Ordering::Relaxed);
        REWARD_STEPS.fetch_add(reward_steps as u64, Ordering::Relaxed);
    }
}
