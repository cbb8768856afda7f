//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomId validation error
    #[error("RoomId cannot be empty")]
    RoomIdEmpty,

    /// HostId validation error
    #[error("HostId cannot be empty")]
    HostIdEmpty,

    /// RoomName validation error
    #[error("Room name cannot be empty")]
    RoomNameEmpty,

    /// CommentId validation error
    #[error("CommentId cannot be empty")]
    CommentIdEmpty,

    /// CommentContent validation error
    #[error("Comment content cannot be empty")]
    CommentContentEmpty,

    /// ConnectionId validation error
    #[error("ConnectionId cannot be empty")]
    ConnectionIdEmpty,
}

/// Errors related to Room domain logic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// Caller is not the host of the room
    #[error("Host '{caller}' is not the host of room '{room_id}'")]
    NotHost { room_id: String, caller: String },
}

/// Errors raised by store accessors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not serve the request
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised when pushing a payload to a live connection
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PushError {
    /// The connection no longer exists; its record is stale
    #[error("Connection '{0}' is gone")]
    Gone(String),

    /// Any other delivery failure
    #[error("Failed to push to connection '{connection_id}': {reason}")]
    Transport {
        connection_id: String,
        reason: String,
    },
}
