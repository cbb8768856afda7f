//! InMemory Connection Repository 実装
//!
//! connectionId をキーとする主テーブルと、roomId → connectionId 集合の
//! セカンダリインデックスを同じロックの下で更新します。

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Connection, ConnectionId, ConnectionRepository, RepositoryError, RoomId};

#[derive(Default)]
struct ConnectionTable {
    by_id: HashMap<ConnectionId, Connection>,
    by_room: HashMap<RoomId, HashSet<ConnectionId>>,
}

impl ConnectionTable {
    fn unindex(&mut self, connection: &Connection) {
        if let Some(ids) = self.by_room.get_mut(&connection.room_id) {
            ids.remove(&connection.connection_id);
            if ids.is_empty() {
                self.by_room.remove(&connection.room_id);
            }
        }
    }
}

/// インメモリ Connection Repository 実装
#[derive(Default)]
pub struct InMemoryConnectionRepository {
    table: Mutex<ConnectionTable>,
}

impl InMemoryConnectionRepository {
    /// 新しい InMemoryConnectionRepository を作成
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConnectionRepository for InMemoryConnectionRepository {
    async fn save(&self, connection: &Connection) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;

        // 別のルームに参加し直した場合は古いインデックスを外す
        if let Some(previous) = table
            .by_id
            .insert(connection.connection_id.clone(), connection.clone())
        {
            table.unindex(&previous);
        }
        table
            .by_room
            .entry(connection.room_id.clone())
            .or_default()
            .insert(connection.connection_id.clone());
        Ok(())
    }

    async fn delete(&self, connection_id: &ConnectionId) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        if let Some(removed) = table.by_id.remove(connection_id) {
            table.unindex(&removed);
        }
        Ok(())
    }

    async fn find_ids_by_room(
        &self,
        room_id: &RoomId,
    ) -> Result<Vec<ConnectionId>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table
            .by_room
            .get(room_id)
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default())
    }
}
