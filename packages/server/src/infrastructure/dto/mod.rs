//! Data transfer objects for the HTTP API and the WebSocket channel.

pub mod http;
pub mod websocket;
