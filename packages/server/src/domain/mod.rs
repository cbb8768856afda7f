//! Domain layer for the comment platform.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod gateway;
pub mod repository;
pub mod value_object;

pub use entity::{Comment, Connection, Room, RoomStatus};
pub use error::{PushError, RepositoryError, RoomError, ValueObjectError};
pub use factory::{CommentIdFactory, ConnectionIdFactory, RoomIdFactory};
pub use gateway::ConnectionGateway;
pub use repository::{CommentRepository, ConnectionRepository, RoomRepository};
pub use value_object::{
    ANONYMOUS_NICKNAME, CommentContent, CommentId, ConnectionId, HostId, Nickname, RoomId,
    RoomName, Timestamp,
};
