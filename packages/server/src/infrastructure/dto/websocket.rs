//! WebSocket frame DTOs.

use serde::{Deserialize, Serialize};

/// Action name of the join-room frame
pub const JOIN_ROOM_ACTION: &str = "joinRoom";

/// Frame sent by a client, routed by its `action`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFrame {
    pub action: Option<String>,
    pub room_id: Option<String>,
}

impl ClientFrame {
    /// Build a join-room frame
    pub fn join_room(room_id: impl Into<String>) -> Self {
        Self {
            action: Some(JOIN_ROOM_ACTION.to_string()),
            room_id: Some(room_id.into()),
        }
    }
}

/// Reply to a client frame, carrying an HTTP-like status code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionAck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionAck {
    pub fn ok(action: Option<String>) -> Self {
        Self {
            action,
            status_code: 200,
            message: None,
        }
    }

    pub fn error(action: Option<String>, status_code: u16, message: impl Into<String>) -> Self {
        Self {
            action,
            status_code,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
