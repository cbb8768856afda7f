//! Repository traits (store accessors).
//!
//! The domain layer defines the interfaces; the infrastructure layer provides
//! the implementations. UseCases depend only on these traits.

use async_trait::async_trait;

use super::{Comment, Connection, ConnectionId, HostId, RepositoryError, Room, RoomId};

/// Keyed store of rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Write the room, replacing any record with the same id.
    async fn save(&self, room: &Room) -> Result<(), RepositoryError>;

    /// Point read by id.
    async fn find_by_id(&self, room_id: &RoomId) -> Result<Option<Room>, RepositoryError>;

    /// All rooms owned by `host_id`.
    ///
    /// Implementations may scan the whole store.
    async fn find_by_host(&self, host_id: &HostId) -> Result<Vec<Room>, RepositoryError>;
}

/// Append-only store of comments keyed by (room id, comment id).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn append(&self, comment: &Comment) -> Result<(), RepositoryError>;

    /// All comments of a room, ascending by [`CommentId`](super::CommentId).
    async fn find_by_room(&self, room_id: &RoomId) -> Result<Vec<Comment>, RepositoryError>;
}

/// Store of connections that joined a room, with a secondary index by room.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// Insert or replace the record for `connection.connection_id`.
    async fn save(&self, connection: &Connection) -> Result<(), RepositoryError>;

    /// Remove the record. Deleting an unknown id succeeds.
    async fn delete(&self, connection_id: &ConnectionId) -> Result<(), RepositoryError>;

    /// Ids of the connections currently joined to `room_id`.
    async fn find_ids_by_room(
        &self,
        room_id: &RoomId,
    ) -> Result<Vec<ConnectionId>, RepositoryError>;
}
