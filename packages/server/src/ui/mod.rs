//! HTTP and WebSocket surface of the comment server.

pub mod error;
pub mod extract;
mod handler;
mod runner;
mod signal;
pub mod state;

pub use error::{ApiError, ServerError};
pub use runner::{create_app, run};
pub use state::AppState;
