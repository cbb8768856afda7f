//! Live Comment server library.
//!
//! Hosts open rooms, viewers post comments over HTTP, and every comment is
//! pushed to the WebSocket connections that joined the room.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::{create_app, run};
