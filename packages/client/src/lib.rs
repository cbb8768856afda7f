//! Live Comment client library.
//!
//! HTTP client for the room, comment and stream APIs, and a WebSocket watcher
//! that follows the comments of one room.

pub mod api;
pub mod display;
pub mod error;
pub mod watch;

// Re-export entry points
pub use api::ApiClient;
pub use error::ClientError;
pub use watch::{RoomWatcher, WatchEvent};
