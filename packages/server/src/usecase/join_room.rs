//! UseCase: ルーム参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 存在しないルームには参加できず、接続レコードも作成されないことを保証
//! - 参加済みの接続が別ルームに参加し直した場合、最後のルームに紐づくことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：存在するルームへの参加
//! - 異常系：存在しないルーム、ストレージ障害
//! - エッジケース：CLOSED のルームへの参加（許可される）

use std::sync::Arc;

use crate::domain::{
    Connection, ConnectionId, ConnectionRepository, RoomId, RoomRepository, Timestamp,
};

use super::error::JoinRoomError;

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    room_repository: Arc<dyn RoomRepository>,
    connection_repository: Arc<dyn ConnectionRepository>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(
        room_repository: Arc<dyn RoomRepository>,
        connection_repository: Arc<dyn ConnectionRepository>,
    ) -> Self {
        Self {
            room_repository,
            connection_repository,
        }
    }

    /// ルーム参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(Connection)` - 保存された接続レコード
    /// * `Err(JoinRoomError)` - ルームが存在しない、または保存失敗
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        room_id: RoomId,
    ) -> Result<Connection, JoinRoomError> {
        // 1. ルームの存在確認（OPEN かどうかは問わない）
        if self.room_repository.find_by_id(&room_id).await?.is_none() {
            return Err(JoinRoomError::RoomNotFound(room_id.as_str().to_string()));
        }

        // 2. 接続レコードを保存（既存レコードは上書き）
        let connection = Connection::new(connection_id, room_id, Timestamp::now());
        self.connection_repository.save(&connection).await?;
        tracing::info!(
            "Connection '{}' joined room '{}'",
            connection.connection_id,
            connection.room_id
        );

        Ok(connection)
    }
}
