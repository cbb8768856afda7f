//! Room and comment endpoints.

use live_comment_server::infrastructure::dto::http::{
    CloseRoomRequest, CloseRoomResponse, CommentDto, CreateRoomRequest, CreateRoomResponse,
    ListCommentsResponse, ListRoomsResponse, PostCommentRequest, RoomDto,
};
use reqwest::Method;

use super::ApiClient;
use crate::error::ClientError;

impl ApiClient {
    /// `POST /rooms`
    pub async fn create_room(
        &self,
        name: &str,
        host_id: &str,
    ) -> Result<CreateRoomResponse, ClientError> {
        let body = CreateRoomRequest {
            name: Some(name.to_string()),
            host_id: Some(host_id.to_string()),
        };
        Self::send_json(self.request(Method::POST, &["rooms"])?.json(&body)).await
    }

    /// `GET /rooms?hostId=`
    pub async fn list_rooms(&self, host_id: &str) -> Result<Vec<RoomDto>, ClientError> {
        let builder = self
            .request(Method::GET, &["rooms"])?
            .query(&[("hostId", host_id)]);
        let response: ListRoomsResponse = Self::send_json(builder).await?;
        Ok(response.rooms)
    }

    /// `PATCH /rooms/{roomId}`
    pub async fn close_room(
        &self,
        room_id: &str,
        host_id: &str,
    ) -> Result<CloseRoomResponse, ClientError> {
        let body = CloseRoomRequest {
            host_id: Some(host_id.to_string()),
        };
        let builder = self.request(Method::PATCH, &["rooms", room_id])?;
        Self::send_json(builder.json(&body)).await
    }

    /// `POST /rooms/{roomId}/comments`
    pub async fn post_comment(
        &self,
        room_id: &str,
        content: &str,
        nickname: Option<&str>,
    ) -> Result<CommentDto, ClientError> {
        let body = PostCommentRequest {
            room_id: Some(room_id.to_string()),
            content: Some(content.to_string()),
            nickname: nickname.map(str::to_string),
        };
        let builder = self.request(Method::POST, &["rooms", room_id, "comments"])?;
        Self::send_json(builder.json(&body)).await
    }

    /// `GET /rooms/{roomId}/comments`, oldest first
    pub async fn list_comments(&self, room_id: &str) -> Result<Vec<CommentDto>, ClientError> {
        let builder = self.request(Method::GET, &["rooms", room_id, "comments"])?;
        let response: ListCommentsResponse = Self::send_json(builder).await?;
        Ok(response.comments)
    }
}
