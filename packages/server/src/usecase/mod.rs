//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod broadcast_comment;
pub mod close_room;
pub mod connect;
pub mod create_room;
pub mod disconnect;
pub mod error;
pub mod join_room;
pub mod list_comments;
pub mod list_host_rooms;
pub mod post_comment;

pub use broadcast_comment::{BroadcastCommentUseCase, BroadcastSummary};
pub use close_room::CloseRoomUseCase;
pub use connect::ConnectUseCase;
pub use create_room::CreateRoomUseCase;
pub use disconnect::DisconnectUseCase;
pub use error::{CloseRoomError, JoinRoomError};
pub use join_room::JoinRoomUseCase;
pub use list_comments::ListCommentsUseCase;
pub use list_host_rooms::ListHostRoomsUseCase;
pub use post_comment::PostCommentUseCase;
