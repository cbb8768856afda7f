//! WebSocket connection registry.
//!
//! Each upgraded socket registers the sending half of an unbounded channel; a
//! writer task owned by the socket drains the channel into the WebSocket.
//! Pushing to a connection therefore never blocks on the network. Comments are
//! sent as their JSON record (`CommentDto`).

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc::UnboundedSender};

use crate::{
    domain::{Comment, ConnectionGateway, ConnectionId, PushError, Timestamp},
    infrastructure::dto::http::CommentDto,
};

/// Live connection information
pub struct ClientInfo {
    /// Message sender channel
    pub sender: UnboundedSender<String>,
    /// Timestamp when connected
    pub connected_at: Timestamp,
}

/// Registry of live WebSocket connections addressed by connection id.
#[derive(Default)]
pub struct WebSocketConnectionRegistry {
    clients: Mutex<HashMap<ConnectionId, ClientInfo>>,
}

impl WebSocketConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a live connection.
    pub async fn register(
        &self,
        connection_id: ConnectionId,
        sender: UnboundedSender<String>,
        connected_at: Timestamp,
    ) {
        let mut clients = self.clients.lock().await;
        clients.insert(
            connection_id,
            ClientInfo {
                sender,
                connected_at,
            },
        );
    }

    /// Forget a connection and return when it was registered.
    ///
    /// Unknown ids (e.g. already evicted by a failed push) yield `None`.
    pub async fn unregister(&self, connection_id: &ConnectionId) -> Option<Timestamp> {
        let mut clients = self.clients.lock().await;
        clients.remove(connection_id).map(|client| client.connected_at)
    }

    /// Number of live connections.
    pub async fn count(&self) -> usize {
        let clients = self.clients.lock().await;
        clients.len()
    }
}

#[async_trait]
impl ConnectionGateway for WebSocketConnectionRegistry {
    async fn push(
        &self,
        connection_id: &ConnectionId,
        comment: &Comment,
    ) -> Result<(), PushError> {
        let payload = serde_json::to_string(&CommentDto::from(comment)).map_err(|e| {
            PushError::Transport {
                connection_id: connection_id.to_string(),
                reason: format!("failed to encode comment: {e}"),
            }
        })?;

        let mut clients = self.clients.lock().await;
        let Some(client) = clients.get(connection_id) else {
            return Err(PushError::Gone(connection_id.to_string()));
        };

        if client.sender.send(payload).is_err() {
            // The socket's writer task has exited; drop the dead sender.
            clients.remove(connection_id);
            tracing::debug!(
                "Connection '{}' closed its channel before delivery",
                connection_id
            );
            return Err(PushError::Gone(connection_id.to_string()));
        }
        Ok(())
    }
}
