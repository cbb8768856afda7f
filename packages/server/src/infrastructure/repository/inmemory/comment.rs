//! InMemory Comment Repository 実装
//!
//! roomId をパーティションキー、commentId をソートキーとするテーブルを
//! `HashMap<RoomId, BTreeMap<CommentId, Comment>>` で表現します。
//! ルーム単位の範囲読み出しは commentId の昇順になります。

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Comment, CommentId, CommentRepository, RepositoryError, RoomId};

/// インメモリ Comment Repository 実装
#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<HashMap<RoomId, BTreeMap<CommentId, Comment>>>,
}

impl InMemoryCommentRepository {
    /// 新しい InMemoryCommentRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn append(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let mut comments = self.comments.lock().await;
        comments
            .entry(comment.room_id.clone())
            .or_default()
            .insert(comment.comment_id.clone(), comment.clone());
        Ok(())
    }

    async fn find_by_room(&self, room_id: &RoomId) -> Result<Vec<Comment>, RepositoryError> {
        let comments = self.comments.lock().await;
        Ok(comments
            .get(room_id)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CommentContent, CommentIdFactory, Nickname, Timestamp};

    fn create_comment(room: &str, comment_id: CommentId, content: &str) -> Comment {
        Comment::new(
            RoomId::new(room.to_string()).unwrap(),
            comment_id,
            CommentContent::new(content.to_string()).unwrap(),
            Nickname::anonymous(),
            Timestamp::new(1000),
        )
    }

    #[tokio::test]
    async fn test_append_and_find_by_room() {
        // テスト項目: 追加したコメントをルーム単位で取得できる
        // given (前提条件):
        let repo = InMemoryCommentRepository::new();
        let comment = create_comment("r1", CommentIdFactory::generate(), "hello");

        // when (操作):
        repo.append(&comment).await.unwrap();
        let comments = repo
            .find_by_room(&RoomId::new("r1".to_string()).unwrap())
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(comments, vec![comment]);
    }

    #[tokio::test]
    async fn test_find_by_room_orders_by_comment_id() {
        // テスト項目: コメントは挿入順ではなく commentId の昇順で返される
        // given (前提条件):
        let repo = InMemoryCommentRepository::new();
        let b = create_comment("r1", CommentId::new("b".to_string()).unwrap(), "second");
        let a = create_comment("r1", CommentId::new("a".to_string()).unwrap(), "first");
        repo.append(&b).await.unwrap();
        repo.append(&a).await.unwrap();

        // when (操作):
        let comments = repo
            .find_by_room(&RoomId::new("r1".to_string()).unwrap())
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(comments, vec![a, b]);
    }

    #[tokio::test]
    async fn test_find_by_room_isolates_rooms() {
        // テスト項目: 他のルームのコメントは含まれない
        // given (前提条件):
        let repo = InMemoryCommentRepository::new();
        let mine = create_comment("r1", CommentIdFactory::generate(), "mine");
        let other = create_comment("r2", CommentIdFactory::generate(), "other");
        repo.append(&mine).await.unwrap();
        repo.append(&other).await.unwrap();

        // when (操作):
        let comments = repo
            .find_by_room(&RoomId::new("r1".to_string()).unwrap())
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(comments, vec![mine]);
    }

    #[tokio::test]
    async fn test_find_by_room_empty() {
        // テスト項目: コメントのないルームでは空の一覧が返される
        let repo = InMemoryCommentRepository::new();
        let comments = repo
            .find_by_room(&RoomId::new("empty".to_string()).unwrap())
            .await
            .unwrap();
        assert!(comments.is_empty());
    }
}
