//! UseCase: コメント投稿処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - PostCommentUseCase::execute() メソッド
//! - コメントの保存と、保存後のブロードキャスト
//!
//! ### なぜこのテストが必要か
//! - ブロードキャストの失敗が投稿自体の失敗にならないことを保証
//! - 保存に失敗した場合はブロードキャストしないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：コメント保存と参加者への配信
//! - 異常系：保存失敗、配信失敗
//! - エッジケース：存在しないルームへの投稿（許可される）

use std::sync::Arc;

use crate::domain::{
    Comment, CommentContent, CommentIdFactory, CommentRepository, Nickname, RepositoryError,
    RoomId, Timestamp,
};

use super::broadcast_comment::BroadcastCommentUseCase;

/// コメント投稿のユースケース
pub struct PostCommentUseCase {
    comment_repository: Arc<dyn CommentRepository>,
    broadcaster: BroadcastCommentUseCase,
}

impl PostCommentUseCase {
    /// 新しい PostCommentUseCase を作成
    pub fn new(
        comment_repository: Arc<dyn CommentRepository>,
        broadcaster: BroadcastCommentUseCase,
    ) -> Self {
        Self {
            comment_repository,
            broadcaster,
        }
    }

    /// コメント投稿を実行
    ///
    /// ルームの存在や状態は確認しない。保存後のブロードキャストはベストエフォート。
    ///
    /// # Returns
    ///
    /// * `Ok(Comment)` - 保存されたコメント
    /// * `Err(RepositoryError)` - 保存失敗
    pub async fn execute(
        &self,
        room_id: RoomId,
        content: CommentContent,
        nickname: Nickname,
    ) -> Result<Comment, RepositoryError> {
        // 1. コメントを保存
        let comment = Comment::new(
            room_id,
            CommentIdFactory::generate(),
            content,
            nickname,
            Timestamp::now(),
        );
        self.comment_repository.append(&comment).await?;
        tracing::info!(
            "Comment '{}' posted to room '{}'",
            comment.comment_id,
            comment.room_id
        );

        // 2. ルームの参加者へ配信（失敗しても投稿は成功扱い）
        self.broadcaster.execute(&comment).await;

        Ok(comment)
    }
}
