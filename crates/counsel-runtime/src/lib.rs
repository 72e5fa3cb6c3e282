//! Counsel Runtime: synthetic workload used to exercise the service.
//!
//! The simulator is CPU-bound and synchronous; callers on an async runtime
//! should run it on a blocking thread.

pub mod simulator;
pub mod types;

pub use simulator::{simulate_load, Simulator};
pub use types::*;
