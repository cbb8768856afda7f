//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! HashMap をインメモリ DB として使用します。
//!
//! ホスト ID による検索はセカンダリインデックスを持たず、全件走査でフィルタします。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{HostId, RepositoryError, Room, RoomId, RoomRepository};

/// インメモリ Room Repository 実装
#[derive(Default)]
pub struct InMemoryRoomRepository {
    /// roomId をキーとするルームテーブル
    rooms: Mutex<HashMap<RoomId, Room>>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn save(&self, room: &Room) -> Result<(), RepositoryError> {
        let mut rooms = self.rooms.lock().await;
        rooms.insert(room.id.clone(), room.clone());
        Ok(())
    }

    async fn find_by_id(&self, room_id: &RoomId) -> Result<Option<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        Ok(rooms.get(room_id).cloned())
    }

    async fn find_by_host(&self, host_id: &HostId) -> Result<Vec<Room>, RepositoryError> {
        let rooms = self.rooms.lock().await;
        let mut hosted: Vec<Room> = rooms
            .values()
            .filter(|room| room.is_hosted_by(host_id))
            .cloned()
            .collect();

        // HashMap の走査順は不定なので作成順に並べる
        hosted.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        Ok(hosted)
    }
}
