use epi_policy_shared::outcome::SimulationResult;

/// An epidemic simulation driven by some confinement policy.
///
/// Runs one episode over `n_weeks` weeks from `seed`. Any closure or fn item
/// with the matching signature is a simulator.
pub trait PolicySimulator {
    fn simulate(&mut self, n_weeks: u32, seed: u64) -> anyhow::Result<SimulationResult>;
}

impl<F> PolicySimulator for F
where
    F: FnMut(u32, u64) -> anyhow::Result<SimulationResult>,
{
    #[inline]
    fn simulate(&mut self, n_weeks: u32, seed: u64) -> anyhow::Result<SimulationResult> {
        self(n_weeks, seed)
    }
}
