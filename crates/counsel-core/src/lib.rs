//! Counsel Core: configuration and shared error types.

pub mod config;
pub mod error;

pub use config::{CounselConfig, LoadMode, NerBackend};
pub use error::{Error, Result};
