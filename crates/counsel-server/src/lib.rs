//! Counsel server: HTTP routes over the response corpus and text transforms.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
