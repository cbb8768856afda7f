//! Domain factories for generating identifiers.

use super::{CommentId, ConnectionId, RoomId};

/// Factory for generating RoomId instances.
///
/// This factory encapsulates the logic for generating new room identifiers,
/// separating the generation concern from the validation logic in RoomId.
pub struct RoomIdFactory;

impl RoomIdFactory {
    /// Generate a new RoomId with a random UUID v4.
    pub fn generate() -> RoomId {
        RoomId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for generating CommentId instances.
///
/// Comment ids are UUID v7: the leading bits encode the creation time, so the
/// lexical order of the ids is the order in which comments were posted.
pub struct CommentIdFactory;

impl CommentIdFactory {
    pub fn generate() -> CommentId {
        CommentId::from_uuid(uuid::Uuid::now_v7())
    }
}

/// Factory for generating ConnectionId instances.
pub struct ConnectionIdFactory;

impl ConnectionIdFactory {
    pub fn generate() -> ConnectionId {
        ConnectionId::from_uuid(uuid::Uuid::new_v4())
    }
}
