//! HTTP API request/response DTOs.
//!
//! Field names are camelCase on the wire. Request fields are all optional so
//! that presence checks can be reported with the API's own error messages.

use serde::{Deserialize, Serialize};

use crate::domain::{Comment, Room, RoomStatus};

/// Body of `POST /rooms`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: Option<String>,
    pub host_id: Option<String>,
}

/// Response of `POST /rooms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
    pub name: String,
    pub host_id: String,
    pub status: RoomStatus,
    pub created_at: String, // ISO 8601
}

impl From<&Room> for CreateRoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.id.as_str().to_string(),
            name: room.name.as_str().to_string(),
            host_id: room.host_id.as_str().to_string(),
            status: room.status,
            created_at: room.created_at.to_rfc3339(),
        }
    }
}

/// Full room record, as listed by `GET /rooms?hostId=`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub room_id: String,
    pub name: String,
    pub host_id: String,
    pub status: RoomStatus,
    pub created_at: String, // ISO 8601
    pub updated_at: String, // ISO 8601
}

impl From<&Room> for RoomDto {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.id.as_str().to_string(),
            name: room.name.as_str().to_string(),
            host_id: room.host_id.as_str().to_string(),
            status: room.status,
            created_at: room.created_at.to_rfc3339(),
            updated_at: room.updated_at.to_rfc3339(),
        }
    }
}

/// Query of `GET /rooms`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRoomsQuery {
    pub host_id: Option<String>,
}

/// Response of `GET /rooms?hostId=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRoomsResponse {
    pub rooms: Vec<RoomDto>,
}

/// Body of `PATCH /rooms/{roomId}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseRoomRequest {
    pub host_id: Option<String>,
}

/// Response of `PATCH /rooms/{roomId}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseRoomResponse {
    pub room_id: String,
    pub status: RoomStatus,
    pub updated_at: String, // ISO 8601
}

impl From<&Room> for CloseRoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            room_id: room.id.as_str().to_string(),
            status: room.status,
            updated_at: room.updated_at.to_rfc3339(),
        }
    }
}

/// Body of `POST /rooms/{roomId}/comments`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCommentRequest {
    pub room_id: Option<String>,
    pub content: Option<String>,
    pub nickname: Option<String>,
}

/// Comment record. Also the payload pushed to WebSocket clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub room_id: String,
    pub comment_id: String,
    pub content: String,
    pub nickname: String,
    pub created_at: String, // ISO 8601
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            room_id: comment.room_id.as_str().to_string(),
            comment_id: comment.comment_id.as_str().to_string(),
            content: comment.content.as_str().to_string(),
            nickname: comment.nickname.as_str().to_string(),
            created_at: comment.created_at.to_rfc3339(),
        }
    }
}

/// Response of `GET /rooms/{roomId}/comments`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsResponse {
    pub room_id: String,
    pub comments: Vec<CommentDto>,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CommentContent, CommentId, HostId, Nickname, RoomId, RoomName, Timestamp,
    };

    #[test]
    fn test_create_room_response_wire_format() {
        // テスト項目: ルーム作成レスポンスが camelCase の JSON になる
        // given (前提条件):
        let room = Room::open(
            RoomId::new("r1".to_string()).unwrap(),
            RoomName::new("T".to_string()).unwrap(),
            HostId::new("h1".to_string()).unwrap(),
            Timestamp::new(0),
        );

        // when (操作):
        let json = serde_json::to_value(CreateRoomResponse::from(&room)).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "roomId": "r1",
                "name": "T",
                "hostId": "h1",
                "status": "OPEN",
                "createdAt": "1970-01-01T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_comment_dto_wire_format() {
        // テスト項目: コメントが camelCase の JSON になる
        // given (前提条件):
        let comment = Comment::new(
            RoomId::new("r1".to_string()).unwrap(),
            CommentId::new("c1".to_string()).unwrap(),
            CommentContent::new("hello".to_string()).unwrap(),
            Nickname::anonymous(),
            Timestamp::new(0),
        );

        // when (操作):
        let json = serde_json::to_value(CommentDto::from(&comment)).unwrap();

        // then (期待する結果):
        assert_eq!(
            json,
            serde_json::json!({
                "roomId": "r1",
                "commentId": "c1",
                "content": "hello",
                "nickname": "Anonymous",
                "createdAt": "1970-01-01T00:00:00.000Z",
            })
        );
    }

    #[test]
    fn test_post_comment_request_optional_fields() {
        // テスト項目: 省略されたフィールドは None としてデシリアライズされる
        let request: PostCommentRequest =
            serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(request.content.as_deref(), Some("hi"));
        assert!(request.room_id.is_none());
        assert!(request.nickname.is_none());
    }
}
