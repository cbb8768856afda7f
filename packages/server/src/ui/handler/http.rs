//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::{
    domain::{CommentContent, HostId, Nickname, RoomId, RoomName},
    infrastructure::dto::http::{
        CloseRoomRequest, CloseRoomResponse, CommentDto, CreateRoomRequest, CreateRoomResponse,
        ListCommentsResponse, ListRoomsQuery, ListRoomsResponse, PostCommentRequest, RoomDto,
    },
    ui::{
        error::ApiError,
        extract::{JsonBody, required},
        state::AppState,
    },
    usecase::{
        CloseRoomUseCase, CreateRoomUseCase, ListCommentsUseCase, ListHostRoomsUseCase,
        PostCommentUseCase,
    },
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// `POST /rooms`
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody<CreateRoomRequest>,
) -> Result<(StatusCode, Json<CreateRoomResponse>), ApiError> {
    let (Some(name), Some(host_id)) = (required(body.name), required(body.host_id)) else {
        return Err(ApiError::missing_fields("name and hostId"));
    };
    let name = RoomName::new(name)?;
    let host_id = HostId::new(host_id)?;

    let usecase = CreateRoomUseCase::new(state.room_repository.clone());
    let room = usecase.execute(name, host_id).await?;

    Ok((StatusCode::CREATED, Json(CreateRoomResponse::from(&room))))
}

/// `GET /rooms?hostId=...`
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListRoomsQuery>,
) -> Result<Json<ListRoomsResponse>, ApiError> {
    let Some(host_id) = required(query.host_id) else {
        return Err(ApiError::missing_parameter("hostId"));
    };
    let host_id = HostId::new(host_id)?;

    let usecase = ListHostRoomsUseCase::new(state.room_repository.clone());
    let rooms = usecase.execute(host_id).await?;

    Ok(Json(ListRoomsResponse {
        rooms: rooms.iter().map(RoomDto::from).collect(),
    }))
}

/// `PATCH /rooms/{room_id}`
pub async fn close_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    JsonBody(body): JsonBody<CloseRoomRequest>,
) -> Result<Json<CloseRoomResponse>, ApiError> {
    let Some(room_id) = required(Some(room_id)) else {
        return Err(ApiError::missing_parameter("roomId"));
    };
    let Some(host_id) = required(body.host_id) else {
        return Err(ApiError::missing_parameter("hostId"));
    };
    let room_id = RoomId::new(room_id)?;
    let host_id = HostId::new(host_id)?;

    let usecase = CloseRoomUseCase::new(state.room_repository.clone());
    let room = usecase.execute(room_id, host_id).await?;

    Ok(Json(CloseRoomResponse::from(&room)))
}

/// `POST /rooms/{room_id}/comments`
///
/// The path decides the room. A `roomId` in the body is accepted only when it
/// matches the path.
pub async fn post_comment(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    JsonBody(body): JsonBody<PostCommentRequest>,
) -> Result<(StatusCode, Json<CommentDto>), ApiError> {
    if let Some(body_room_id) = required(body.room_id)
        && body_room_id != room_id
    {
        return Err(ApiError::Validation(
            "roomId in body does not match the path".to_string(),
        ));
    }
    let (Some(room_id), Some(content)) = (required(Some(room_id)), required(body.content)) else {
        return Err(ApiError::missing_fields("roomId and content"));
    };
    let room_id = RoomId::new(room_id)?;
    let content = CommentContent::new(content)?;
    let nickname = Nickname::from_optional(body.nickname);

    let usecase = PostCommentUseCase::new(state.comment_repository.clone(), state.broadcaster());
    let comment = usecase.execute(room_id, content, nickname).await?;

    Ok((StatusCode::CREATED, Json(CommentDto::from(&comment))))
}

/// `GET /rooms/{room_id}/comments`
pub async fn list_comments(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<Json<ListCommentsResponse>, ApiError> {
    let Some(room_id) = required(Some(room_id)) else {
        return Err(ApiError::missing_parameter("roomId"));
    };
    let room_id = RoomId::new(room_id)?;

    let usecase = ListCommentsUseCase::new(state.comment_repository.clone());
    let comments = usecase.execute(&room_id).await?;

    Ok(Json(ListCommentsResponse {
        room_id: room_id.as_str().to_string(),
        comments: comments.iter().map(CommentDto::from).collect(),
    }))
}
