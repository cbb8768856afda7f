//! Shared application state.

use std::sync::Arc;

use crate::{
    domain::{CommentRepository, ConnectionRepository, RoomRepository},
    infrastructure::{
        gateway::WebSocketConnectionRegistry,
        repository::{
            InMemoryCommentRepository, InMemoryConnectionRepository, InMemoryRoomRepository,
        },
    },
    usecase::BroadcastCommentUseCase,
};

/// Shared application state
pub struct AppState {
    /// Repository（データアクセス層の抽象化）
    pub room_repository: Arc<dyn RoomRepository>,
    pub comment_repository: Arc<dyn CommentRepository>,
    pub connection_repository: Arc<dyn ConnectionRepository>,
    /// Live WebSocket senders, used as the push gateway
    pub connections: Arc<WebSocketConnectionRegistry>,
}

impl AppState {
    /// State backed by the in-memory stores
    pub fn in_memory() -> Self {
        Self {
            room_repository: Arc::new(InMemoryRoomRepository::new()),
            comment_repository: Arc::new(InMemoryCommentRepository::new()),
            connection_repository: Arc::new(InMemoryConnectionRepository::new()),
            connections: Arc::new(WebSocketConnectionRegistry::new()),
        }
    }

    /// Fan-out usecase wired to this state's connection store and registry
    pub fn broadcaster(&self) -> BroadcastCommentUseCase {
        BroadcastCommentUseCase::new(
            self.connection_repository.clone(),
            self.connections.clone(),
        )
    }
}
