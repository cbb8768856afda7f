//! Core domain models for the comment platform.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    error::RoomError,
    value_object::{
        CommentContent, CommentId, ConnectionId, HostId, Nickname, RoomId, RoomName, Timestamp,
    },
};

/// Lifecycle status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Open,
    Closed,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Open => "OPEN",
            RoomStatus::Closed => "CLOSED",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Represents a host-owned room that viewers comment in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Room identifier
    pub id: RoomId,
    /// Display name
    pub name: RoomName,
    /// Owner of the room
    pub host_id: HostId,
    /// OPEN until the host closes it
    pub status: RoomStatus,
    /// Timestamp when the room was created
    pub created_at: Timestamp,
    /// Timestamp of the last status change
    pub updated_at: Timestamp,
}

impl Room {
    /// Create a new OPEN room
    pub fn open(id: RoomId, name: RoomName, host_id: HostId, created_at: Timestamp) -> Self {
        Self {
            id,
            name,
            host_id,
            status: RoomStatus::Open,
            created_at,
            updated_at: created_at,
        }
    }

    /// Whether `host_id` owns this room
    pub fn is_hosted_by(&self, host_id: &HostId) -> bool {
        &self.host_id == host_id
    }

    /// Close the room on behalf of `host_id`
    ///
    /// Closing an already closed room succeeds again and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::NotHost` if `host_id` is not the host of the room
    pub fn close(&mut self, host_id: &HostId, now: Timestamp) -> Result<(), RoomError> {
        if !self.is_hosted_by(host_id) {
            return Err(RoomError::NotHost {
                room_id: self.id.as_str().to_string(),
                caller: host_id.as_str().to_string(),
            });
        }
        self.status = RoomStatus::Closed;
        self.updated_at = now;
        Ok(())
    }
}

/// Represents an immutable comment posted to a room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub room_id: RoomId,
    pub comment_id: CommentId,
    pub content: CommentContent,
    pub nickname: Nickname,
    pub created_at: Timestamp,
}

impl Comment {
    /// Create a new comment
    pub fn new(
        room_id: RoomId,
        comment_id: CommentId,
        content: CommentContent,
        nickname: Nickname,
        created_at: Timestamp,
    ) -> Self {
        Self {
            room_id,
            comment_id,
            content,
            nickname,
            created_at,
        }
    }
}

/// A live WebSocket connection that joined a room
///
/// Records are written on join only; a connection that never joined has no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub connection_id: ConnectionId,
    pub room_id: RoomId,
    pub joined_at: Timestamp,
}

impl Connection {
    pub fn new(connection_id: ConnectionId, room_id: RoomId, joined_at: Timestamp) -> Self {
        Self {
            connection_id,
            room_id,
            joined_at,
        }
    }
}
