//! Counsel Store: read-only psychologist response corpus with an id index,
//! case-insensitive filtering, pagination and random selection.

pub mod corpus;
pub mod filter;
pub mod types;

pub use corpus::{pick_random, Corpus};
pub use filter::{filter_records, Category, Page, ResponseFilter};
pub use types::*;
