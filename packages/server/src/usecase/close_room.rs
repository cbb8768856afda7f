//! UseCase: ルームのクローズ処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - CloseRoomUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - ホスト本人のみがルームを閉じられることを保証
//! - 存在しないルームに対して NotFound を返すことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：ホストによるクローズ
//! - 異常系：ホスト以外によるクローズ、存在しないルーム
//! - エッジケース：既に閉じたルームの再クローズ
//!
//! 読み出しと書き込みは別操作で、楽観ロックは行わない。

use std::sync::Arc;

use crate::domain::{HostId, Room, RoomId, RoomRepository, Timestamp};

use super::error::CloseRoomError;

/// ルームのクローズのユースケース
pub struct CloseRoomUseCase {
    room_repository: Arc<dyn RoomRepository>,
}

impl CloseRoomUseCase {
    /// 新しい CloseRoomUseCase を作成
    pub fn new(room_repository: Arc<dyn RoomRepository>) -> Self {
        Self { room_repository }
    }

    /// ルームのクローズを実行
    ///
    /// # Returns
    ///
    /// * `Ok(Room)` - CLOSED に更新されたルーム
    /// * `Err(CloseRoomError)` - ルームが存在しない、ホストではない、または保存失敗
    pub async fn execute(&self, room_id: RoomId, host_id: HostId) -> Result<Room, CloseRoomError> {
        // 1. ルームを取得
        let mut room = self
            .room_repository
            .find_by_id(&room_id)
            .await?
            .ok_or_else(|| CloseRoomError::RoomNotFound(room_id.as_str().to_string()))?;

        // 2. ホスト確認と状態更新（Domain Model）
        room.close(&host_id, Timestamp::now())?;

        // 3. 保存
        self.room_repository.save(&room).await?;
        tracing::info!("Room '{}' closed by host '{}'", room.id, host_id);

        Ok(room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            RepositoryError, RoomError, RoomIdFactory, RoomName, RoomStatus,
            repository::MockRoomRepository,
        },
        infrastructure::repository::InMemoryRoomRepository,
    };

    fn host(value: &str) -> HostId {
        HostId::new(value.to_string()).unwrap()
    }

    async fn create_test_repository_with_room(
        host_id: &str,
    ) -> (Arc<InMemoryRoomRepository>, Room) {
        let repository = Arc::new(InMemoryRoomRepository::new());
        let room = Room::open(
            RoomIdFactory::generate(),
            RoomName::new("T".to_string()).unwrap(),
            host(host_id),
            Timestamp::new(1000),
        );
        repository.save(&room).await.unwrap();
        (repository, room)
    }

    #[tokio::test]
    async fn test_close_room_by_host() {
        // テスト項目: ホスト本人がクローズすると CLOSED になり保存される
        // given (前提条件):
        let (repository, room) = create_test_repository_with_room("h1").await;
        let usecase = CloseRoomUseCase::new(repository.clone());

        // when (操作):
        let closed = usecase.execute(room.id.clone(), host("h1")).await.unwrap();

        // then (期待する結果):
        assert_eq!(closed.status, RoomStatus::Closed);
        assert!(closed.updated_at > room.updated_at);

        let stored = repository.find_by_id(&room.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RoomStatus::Closed);
    }

    #[tokio::test]
    async fn test_close_room_by_other_host_is_forbidden() {
        // テスト項目: ホスト以外がクローズすると Forbidden になり、状態は変わらない
        // given (前提条件):
        let (repository, room) = create_test_repository_with_room("h1").await;
        let usecase = CloseRoomUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(room.id.clone(), host("h2")).await;

        // then (期待する結果):
        assert!(matches!(
            result,
            Err(CloseRoomError::Forbidden(RoomError::NotHost { .. }))
        ));
        let stored = repository.find_by_id(&room.id).await.unwrap().unwrap();
        assert_eq!(stored.status, RoomStatus::Open);
    }

    #[tokio::test]
    async fn test_close_room_not_found() {
        // テスト項目: 存在しないルームは NotFound になる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = CloseRoomUseCase::new(repository);

        // when (操作):
        let result = usecase
            .execute(RoomId::new("missing".to_string()).unwrap(), host("h1"))
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(CloseRoomError::RoomNotFound("missing".to_string()))
        );
    }

    #[tokio::test]
    async fn test_close_room_twice() {
        // テスト項目: 既に閉じたルームをホストが再度閉じても成功する
        // given (前提条件):
        let (repository, room) = create_test_repository_with_room("h1").await;
        let usecase = CloseRoomUseCase::new(repository);
        usecase.execute(room.id.clone(), host("h1")).await.unwrap();

        // when (操作):
        let result = usecase.execute(room.id.clone(), host("h1")).await;

        // then (期待する結果):
        assert_eq!(result.unwrap().status, RoomStatus::Closed);
    }

    #[tokio::test]
    async fn test_close_room_forbidden_does_not_write() {
        // テスト項目: ホスト確認に失敗した場合は保存処理が呼ばれない
        // given (前提条件):
        let room = Room::open(
            RoomId::new("r1".to_string()).unwrap(),
            RoomName::new("T".to_string()).unwrap(),
            host("h1"),
            Timestamp::new(1000),
        );
        let mut repository = MockRoomRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(room.clone())));
        repository.expect_save().times(0);
        let usecase = CloseRoomUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase
            .execute(RoomId::new("r1".to_string()).unwrap(), host("h2"))
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(CloseRoomError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_close_room_storage_failure() {
        // テスト項目: 読み出しに失敗した場合は Repository エラーが返される
        // given (前提条件):
        let mut repository = MockRoomRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::Unavailable("down".to_string())));
        let usecase = CloseRoomUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase
            .execute(RoomId::new("r1".to_string()).unwrap(), host("h1"))
            .await;

        // then (期待する結果):
        assert!(matches!(result, Err(CloseRoomError::Repository(_))));
    }
}
