//! Handler modules for HTTP and WebSocket endpoints.

pub mod http;
pub mod websocket;

// Re-export HTTP handlers
pub use http::{close_room, create_room, health_check, list_comments, list_rooms, post_comment};

// Re-export WebSocket handlers
pub use websocket::websocket_handler;
