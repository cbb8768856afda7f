//! UseCase: WebSocket 接続処理
//!
//! 接続時には何も永続化しない。接続レコードはルーム参加時に作成される。

use crate::domain::ConnectionId;

/// WebSocket 接続のユースケース
#[derive(Default)]
pub struct ConnectUseCase;

impl ConnectUseCase {
    pub fn new() -> Self {
        Self
    }

    /// 接続を受け付ける（常に成功）
    pub fn execute(&self, connection_id: &ConnectionId) {
        tracing::info!("Connect requested for: {}", connection_id);
    }
}
