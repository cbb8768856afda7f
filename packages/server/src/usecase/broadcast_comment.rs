//! UseCase: コメントのブロードキャスト（ファンアウト）
//!
//! 投稿されたコメントを、そのルームに参加中の全接続へ配信します。
//!
//! - 配信は接続ごとに独立して並行に行い、全ての配信の完了を待つ
//! - `PushError::Gone` を返した接続は古い接続とみなして接続レコードを削除する
//! - その他の配信エラーはログに記録して無視する（リトライしない）
//! - 配信結果はどれも呼び出し元の失敗にはならない
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BroadcastCommentUseCase::execute() メソッド
//!
//! ### なぜこのテストが必要か
//! - 1 つの接続の失敗が他の接続への配信を妨げないことを保証
//! - 古い接続のみが削除され、一時的なエラーの接続は残ることを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：全接続への配信
//! - 異常系：Gone / Transport エラーの混在、接続一覧の取得失敗
//! - エッジケース：参加者のいないルーム

use std::sync::Arc;

use futures_util::future::join_all;

use crate::domain::{Comment, ConnectionGateway, ConnectionId, ConnectionRepository, PushError};

/// ブロードキャスト結果の集計（ログとテスト用。API レスポンスには含めない）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastSummary {
    /// 配信に成功した接続数
    pub delivered: usize,
    /// Gone により削除した接続数
    pub pruned: usize,
    /// その他のエラーで配信できなかった接続数
    pub failed: usize,
}

enum Delivery {
    Delivered,
    Pruned,
    Failed,
}

/// コメントのブロードキャストのユースケース
pub struct BroadcastCommentUseCase {
    connection_repository: Arc<dyn ConnectionRepository>,
    gateway: Arc<dyn ConnectionGateway>,
}

impl BroadcastCommentUseCase {
    /// 新しい BroadcastCommentUseCase を作成
    pub fn new(
        connection_repository: Arc<dyn ConnectionRepository>,
        gateway: Arc<dyn ConnectionGateway>,
    ) -> Self {
        Self {
            connection_repository,
            gateway,
        }
    }

    /// コメントをルームの全接続に配信
    ///
    /// 失敗は全てこのメソッド内で処理され、呼び出し元には伝播しない。
    pub async fn execute(&self, comment: &Comment) -> BroadcastSummary {
        let connection_ids = match self
            .connection_repository
            .find_ids_by_room(&comment.room_id)
            .await
        {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!(
                    "Failed to look up connections of room '{}': {}",
                    comment.room_id,
                    e
                );
                return BroadcastSummary::default();
            }
        };

        if connection_ids.is_empty() {
            return BroadcastSummary::default();
        }

        let deliveries = connection_ids
            .iter()
            .map(|connection_id| self.deliver(connection_id, comment));

        let summary = join_all(deliveries).await.into_iter().fold(
            BroadcastSummary::default(),
            |mut summary, delivery| {
                match delivery {
                    Delivery::Delivered => summary.delivered += 1,
                    Delivery::Pruned => summary.pruned += 1,
                    Delivery::Failed => summary.failed += 1,
                }
                summary
            },
        );

        tracing::info!(
            "Broadcasted comment '{}' to room '{}': delivered={}, pruned={}, failed={}",
            comment.comment_id,
            comment.room_id,
            summary.delivered,
            summary.pruned,
            summary.failed
        );
        summary
    }

    async fn deliver(&self, connection_id: &ConnectionId, comment: &Comment) -> Delivery {
        match self.gateway.push(connection_id, comment).await {
            Ok(()) => Delivery::Delivered,
            Err(PushError::Gone(_)) => {
                tracing::info!("Pruning stale connection '{}'", connection_id);
                if let Err(e) = self.connection_repository.delete(connection_id).await {
                    tracing::warn!(
                        "Failed to delete stale connection '{}': {}",
                        connection_id,
                        e
                    );
                }
                Delivery::Pruned
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Delivery::Failed
            }
        }
    }
}
