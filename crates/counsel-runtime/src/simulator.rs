//! Nested-loop load simulator.

use rand::Rng;
use tracing::{info, trace};

use crate::types::*;

/// Load simulator with configurable loop bounds.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    outer: usize,
    inner: usize,
    sample: usize,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(OUTER_ITERATIONS, INNER_ITERATIONS, SAMPLE_SIZE)
    }
}

impl Simulator {
    pub fn new(outer: usize, inner: usize, sample: usize) -> Self {
        Self {
            outer,
            inner,
            sample,
        }
    }

    /// Run every iteration and keep the first `sample` results.
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> SimulationReport {
        info!("Starting simulation of {}x{} tasks", self.outer, self.inner);

        let mut results = Vec::with_capacity(self.outer * self.inner);
        for x in 0..self.outer {
            for y in 0..self.inner {
                let sum = offset_sum(x, y, rng);
                results.push(shout_reversed(&format!("Value {}", sum)));
            }
        }

        let total = results.len();
        results.truncate(self.sample);
        info!("Simulation complete with {} results", total);

        SimulationReport {
            simulation_results: results,
            total,
        }
    }
}

/// Run the default 100×100 workload.
pub fn simulate_load<R: Rng + ?Sized>(rng: &mut R) -> SimulationReport {
    Simulator::default().run(rng)
}

/// `x + y` plus a random offset in `0..=MAX_OFFSET`.
fn offset_sum<R: Rng + ?Sized>(x: usize, y: usize, rng: &mut R) -> usize {
    let result = x + y + rng.random_range(0..=MAX_OFFSET) as usize;
    trace!("offset_sum: {} + {} = {}", x, y, result);
    result
}

/// Uppercase, then reverse by character.
fn shout_reversed(text: &str) -> String {
    text.to_uppercase().chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let report = simulate_load(&mut rng);
        assert_eq!(report.total, 10_000);
        assert_eq!(report.simulation_results.len(), 10);
    }

    #[test]
    fn test_shape_is_independent_of_seed() {
        for seed in [0, 99, u64::MAX] {
            let report = simulate_load(&mut StdRng::seed_from_u64(seed));
            assert_eq!(report.total, 10_000);
            assert_eq!(report.simulation_results.len(), 10);
        }
    }

    #[test]
    fn test_results_are_reversed_uppercase_values() {
        let report = simulate_load(&mut StdRng::seed_from_u64(5));
        // First row is x = 0, y = 0..10, so each sum is y + offset
        for (y, result) in report.simulation_results.iter().enumerate() {
            let forward: String = result.chars().rev().collect();
            let value: usize = forward
                .strip_prefix("VALUE ")
                .expect("prefix")
                .parse()
                .expect("number");
            assert!(value >= y && value <= y + MAX_OFFSET as usize);
        }
    }

    #[test]
    fn test_small_run_keeps_everything_below_sample() {
        let report = Simulator::new(2, 3, 10).run(&mut StdRng::seed_from_u64(2));
        assert_eq!(report.total, 6);
        assert_eq!(report.simulation_results.len(), 6);
    }

    #[test]
    fn test_shout_reversed() {
        assert_eq!(shout_reversed("Value 12"), "21 EULAV");
    }
}
