//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{RepositoryError, RoomError};

/// ルームのクローズ処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CloseRoomError {
    /// 指定されたルームが存在しない
    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    /// 呼び出し元がルームのホストではない
    #[error(transparent)]
    Forbidden(#[from] RoomError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// ルーム参加処理のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JoinRoomError {
    /// 指定されたルームが存在しない
    #[error("Room '{0}' not found")]
    RoomNotFound(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
