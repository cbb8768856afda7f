//! UseCase: ルームのコメント一覧

use std::sync::Arc;

use crate::domain::{Comment, CommentRepository, RepositoryError, RoomId};

/// ルームのコメント一覧を取得するユースケース
pub struct ListCommentsUseCase {
    comment_repository: Arc<dyn CommentRepository>,
}

impl ListCommentsUseCase {
    pub fn new(comment_repository: Arc<dyn CommentRepository>) -> Self {
        Self { comment_repository }
    }

    /// コメント一覧を commentId の昇順（= 投稿順）で取得
    pub async fn execute(&self, room_id: &RoomId) -> Result<Vec<Comment>, RepositoryError> {
        self.comment_repository.find_by_room(room_id).await
    }
}
