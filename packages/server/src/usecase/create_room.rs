//! UseCase: ルーム作成処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CreateRoomUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 作成されたルームが OPEN であり、ID が毎回一意であることを保証
//! - 冪等キーを持たないため、同じ入力でも別のルームが作成されることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ルーム作成と保存
//! - 異常系：ストレージ障害

use std::sync::Arc;

use crate::domain::{
    HostId, RepositoryError, Room, RoomIdFactory, RoomName, RoomRepository, Timestamp,
};

/// ルーム作成のユースケース
pub struct CreateRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    room_repository: Arc<dyn RoomRepository>,
}

impl CreateRoomUseCase {
    /// 新しい CreateRoomUseCase を作成
    pub fn new(room_repository: Arc<dyn RoomRepository>) -> Self {
        Self { room_repository }
    }

    /// ルーム作成を実行
    ///
    /// # Arguments
    ///
    /// * `name` - ルーム名（Domain Model）
    /// * `host_id` - ホスト ID（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - 作成された OPEN 状態のルーム
    /// * `Err(RepositoryError)` - 保存失敗
    pub async fn execute(&self, name: RoomName, host_id: HostId) -> Result<Room, RepositoryError> {
        let room = Room::open(RoomIdFactory::generate(), name, host_id, Timestamp::now());

        self.room_repository.save(&room).await?;
        tracing::info!("Room '{}' created by host '{}'", room.id, room.host_id);

        Ok(room)
    }
}
