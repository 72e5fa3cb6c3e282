//! Runtime types.

use serde::{Deserialize, Serialize};

/// Outer loop iterations.
pub const OUTER_ITERATIONS: usize = 100;

/// Inner loop iterations per outer iteration.
pub const INNER_ITERATIONS: usize = 100;

/// Number of results echoed back to the caller.
pub const SAMPLE_SIZE: usize = 10;

/// Upper bound (inclusive) of the random offset added to each sum.
pub const MAX_OFFSET: u32 = 100;

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// The first `SAMPLE_SIZE` results, in generation order.
    pub simulation_results: Vec<String>,
    /// Number of results generated.
    pub total: usize,
}
