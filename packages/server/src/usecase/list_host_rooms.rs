//! UseCase: ホスト別ルーム一覧

use std::sync::Arc;

use crate::domain::{HostId, RepositoryError, Room, RoomRepository};

/// ホストが作成したルーム一覧を取得するユースケース
pub struct ListHostRoomsUseCase {
    room_repository: Arc<dyn RoomRepository>,
}

impl ListHostRoomsUseCase {
    pub fn new(room_repository: Arc<dyn RoomRepository>) -> Self {
        Self { room_repository }
    }

    /// ホストのルーム一覧を取得（該当なしは空の一覧）
    pub async fn execute(&self, host_id: HostId) -> Result<Vec<Room>, RepositoryError> {
        self.room_repository.find_by_host(&host_id).await
    }
}
