//! UseCase: WebSocket 切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 切断した接続にコメントが配信され続けないよう、接続レコードが削除されることを保証
//! - ルームに参加せずに切断した場合（レコードなし）もエラーにならないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加済み接続の切断
//! - エッジケース：未参加の接続の切断
//! - 異常系：ストレージ障害

use std::sync::Arc;

use crate::domain::{ConnectionId, ConnectionRepository, RepositoryError};

/// WebSocket 切断のユースケース
pub struct DisconnectUseCase {
    connection_repository: Arc<dyn ConnectionRepository>,
}

impl DisconnectUseCase {
    /// 新しい DisconnectUseCase を作成
    pub fn new(connection_repository: Arc<dyn ConnectionRepository>) -> Self {
        Self {
            connection_repository,
        }
    }

    /// 接続レコードを削除（存在しなくても成功）
    pub async fn execute(&self, connection_id: &ConnectionId) -> Result<(), RepositoryError> {
        self.connection_repository.delete(connection_id).await?;
        tracing::info!("Connection '{}' disconnected", connection_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{Connection, RoomId, Timestamp, repository::MockConnectionRepository},
        infrastructure::repository::InMemoryConnectionRepository,
    };

    #[tokio::test]
    async fn test_disconnect_removes_connection() {
        // テスト項目: 切断すると接続レコードが削除される
        // given (前提条件):
        let repository = Arc::new(InMemoryConnectionRepository::new());
        let connection_id = ConnectionId::new("c1".to_string()).unwrap();
        let room_id = RoomId::new("r1".to_string()).unwrap();
        repository
            .save(&Connection::new(
                connection_id.clone(),
                room_id.clone(),
                Timestamp::new(1000),
            ))
            .await
            .unwrap();
        let usecase = DisconnectUseCase::new(repository.clone());

        // when (操作):
        let result = usecase.execute(&connection_id).await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(repository.find_ids_by_room(&room_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_disconnect_without_join_succeeds() {
        // テスト項目: ルームに参加していない接続の切断も成功する
        let usecase = DisconnectUseCase::new(Arc::new(InMemoryConnectionRepository::new()));
        let result = usecase
            .execute(&ConnectionId::new("never-joined".to_string()).unwrap())
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_disconnect_storage_failure() {
        // テスト項目: 削除に失敗した場合はエラーが返される
        // given (前提条件):
        let mut repository = MockConnectionRepository::new();
        repository
            .expect_delete()
            .returning(|_| Err(RepositoryError::Unavailable("down".to_string())));
        let usecase = DisconnectUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase
            .execute(&ConnectionId::new("c1".to_string()).unwrap())
            .await;

        // then (期待する結果):
        assert!(result.is_err());
    }
}
