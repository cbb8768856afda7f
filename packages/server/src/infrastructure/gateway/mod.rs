//! ConnectionGateway implementations.

pub mod websocket;

pub use websocket::WebSocketConnectionRegistry;
