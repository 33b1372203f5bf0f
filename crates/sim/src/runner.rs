use epi_policy_shared::config::{EvalConfig, DAYS_PER_WEEK, DEAD_CATEGORY, DEFAULT_N_WEEKS};
use epi_policy_shared::outcome::{EpisodeSummary, SimulationResult};
use epi_policy_shared::result::AggregateOutput;

use crate::episode_stats;
use crate::error::EvalError;
use crate::simulator::PolicySimulator;

/// Reduce one simulated episode to its summary statistics.
pub fn summarize_episode(
    episode: usize,
    seed: u64,
    result: &SimulationResult,
) -> Result<EpisodeSummary, EvalError> {
    let dead = result
        .category(DEAD_CATEGORY)
        .ok_or_else(|| EvalError::MissingCategory {
            episode,
            category: DEAD_CATEGORY.to_string(),
        })?;
    let total_dead = *dead.last().ok_or_else(|| EvalError::EmptyCategory {
        episode,
        category: DEAD_CATEGORY.to_string(),
    })?;

    Ok(EpisodeSummary {
        seed,
        days_confined: DAYS_PER_WEEK * result.confined_weeks(),
        total_dead,
        cum_reward: result.cumulative_reward(),
    })
}

/// Run `n_episodes` episodes over a fixed 30-week horizon, one per seed.
///
/// `seeds[i]` drives episode `i`; seeds past `n_episodes` are ignored. Fails
/// before the first simulation if fewer than `n_episodes` seeds are given.
pub fn simulate_policy<S: PolicySimulator + ?Sized>(
    simulator: &mut S,
    n_episodes: usize,
    seeds: &[u64],
) -> Result<AggregateOutput, EvalError> {
    run_inner(simulator, DEFAULT_N_WEEKS, n_episodes, seeds)
}

/// Same as [`simulate_policy`] with the horizon, episode count and seeds
/// taken from `config`.
pub fn run_episodes<S: PolicySimulator + ?Sized>(
    simulator: &mut S,
    config: &EvalConfig,
) -> Result<AggregateOutput, EvalError> {
    run_inner(simulator, config.n_weeks, config.n_episodes, &config.seeds)
}

fn run_inner<S: PolicySimulator + ?Sized>(
    simulator: &mut S,
    n_weeks: u32,
    n_episodes: usize,
    seeds: &[u64],
) -> Result<AggregateOutput, EvalError> {
    if seeds.len() < n_episodes {
        return Err(EvalError::InsufficientSeeds {
            needed: n_episodes,
            supplied: seeds.len(),
        });
    }

    let mut out = AggregateOutput::with_capacity(n_episodes);

    for (episode, &seed) in seeds[..n_episodes].iter().enumerate() {
        let result = simulator.simulate(n_weeks, seed)?;
        let summary = summarize_episode(episode, seed, &result)?;
        episode_stats::record_episode(result.policy.len(), result.rewards.len());
        log::debug!(
            "episode {} (seed {}): {} days confined, {} dead, reward {:.3}",
            episode,
            seed,
            summary.days_confined,
            summary.total_dead,
            summary.cum_reward,
        );
        out.push(summary);
    }

    log::info!(
        "Evaluated {} episodes ({} weeks each): avg {:.1} days confined, avg {:.1} dead, avg reward {:.3}",
        out.n_episodes(),
        n_weeks,
        out.mean_days_confined(),
        out.mean_dead(),
        out.mean_reward(),
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn result_with(dead: Option<Vec<f64>>, policy: Vec<u32>, rewards: Vec<f64>) -> SimulationResult {
        let mut categories = BTreeMap::new();
        categories.insert("infected".to_string(), vec![10.0, 20.0]);
        if let Some(dead) = dead {
            categories.insert("dead".to_string(), dead);
        }
        SimulationResult::new(categories, policy, rewards)
    }

    #[test]
    fn summarize_takes_last_dead_value() {
        let result = result_with(Some(vec![0.0, 1.0, 1.0, 2.0]), vec![0, 1, 1], vec![1.0, 2.0, 3.0]);
        let summary = summarize_episode(0, 11, &result).unwrap();
        assert_eq!(
            summary,
            EpisodeSummary {
                seed: 11,
                days_confined: 14,
                total_dead: 2.0,
                cum_reward: 6.0,
            }
        );
    }

    #[test]
    fn summarize_all_open_policy() {
        let result = result_with(Some(vec![5.0]), vec![0; 30], vec![]);
        let summary = summarize_episode(0, 0, &result).unwrap();
        assert_eq!(summary.days_confined, 0);
        assert_eq!(summary.cum_reward, 0.0);
    }

    #[test]
    fn summarize_missing_dead() {
        let err = summarize_episode(3, 0, &result_with(None, vec![], vec![])).unwrap_err();
        match err {
            EvalError::MissingCategory { episode, category } => {
                assert_eq!(episode, 3);
                assert_eq!(category, "dead");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn summarize_empty_dead() {
        let err = summarize_episode(1, 0, &result_with(Some(vec![]), vec![], vec![])).unwrap_err();
        assert!(matches!(err, EvalError::EmptyCategory { episode: 1, .. }), "got {err}");
    }

    #[test]
    fn insufficient_seeds_checked_before_simulating() {
        let mut calls = 0;
        let mut sim = |_: u32, _: u64| -> anyhow::Result<SimulationResult> {
            calls += 1;
            Ok(result_with(Some(vec![0.0]), vec![], vec![]))
        };
        let err = simulate_policy(&mut sim, 3, &[0]).unwrap_err();
        assert!(
            matches!(err, EvalError::InsufficientSeeds { needed: 3, supplied: 1 }),
            "got {err}"
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn default_config_requires_seeds() {
        let mut sim = |_: u32, _: u64| -> anyhow::Result<SimulationResult> {
            Ok(result_with(Some(vec![0.0]), vec![], vec![]))
        };
        let err = run_episodes(&mut sim, &EvalConfig::default()).unwrap_err();
        assert!(matches!(err, EvalError::InsufficientSeeds { needed: 5, supplied: 0 }));
    }
}
