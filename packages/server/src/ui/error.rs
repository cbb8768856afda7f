//! UI layer error definitions.
//!
//! Every handler error is mapped to an HTTP status and a `{"message": ...}`
//! body. Internal errors are logged and replaced by a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    domain::{RepositoryError, ValueObjectError},
    infrastructure::dto::http::ErrorResponse,
    usecase::{CloseRoomError, JoinRoomError},
};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors returned by HTTP and WebSocket handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid input (400)
    #[error("{0}")]
    Validation(String),

    /// Referenced room does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Caller is not allowed to perform the operation (403)
    #[error("{0}")]
    Forbidden(String),

    /// Anything unexpected (500). The detail is logged, never returned.
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn missing_fields(fields: &str) -> Self {
        Self::Validation(format!("Missing required fields: {fields}"))
    }

    pub fn missing_parameter(name: &str) -> Self {
        Self::Validation(format!("Missing required parameter: {name}"))
    }

    pub fn room_not_found() -> Self {
        Self::NotFound("Room not found".to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller. Logs internal details.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            other => {
                tracing::warn!("Rejected request: {}", other);
                other.to_string()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValueObjectError> for ApiError {
    fn from(err: ValueObjectError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<CloseRoomError> for ApiError {
    fn from(err: CloseRoomError) -> Self {
        match err {
            CloseRoomError::RoomNotFound(_) => ApiError::room_not_found(),
            CloseRoomError::Forbidden(_) => {
                ApiError::Forbidden("Forbidden: Only the host can close the room".to_string())
            }
            CloseRoomError::Repository(e) => e.into(),
        }
    }
}

impl From<JoinRoomError> for ApiError {
    fn from(err: JoinRoomError) -> Self {
        match err {
            JoinRoomError::RoomNotFound(_) => ApiError::room_not_found(),
            JoinRoomError::Repository(e) => e.into(),
        }
    }
}

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoomError;

    #[test]
    fn test_status_codes() {
        // テスト項目: エラー種別ごとに対応する HTTP ステータスになる
        assert_eq!(
            ApiError::missing_parameter("roomId").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::room_not_found().status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Forbidden("no".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_hides_detail() {
        // テスト項目: 内部エラーの詳細は呼び出し元に返されない
        let err = ApiError::from(RepositoryError::Unavailable("secret detail".to_string()));
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_validation_messages() {
        // テスト項目: 必須項目の欠落メッセージが既定の書式になる
        assert_eq!(
            ApiError::missing_fields("name and hostId").to_string(),
            "Missing required fields: name and hostId"
        );
        assert_eq!(
            ApiError::missing_parameter("hostId").to_string(),
            "Missing required parameter: hostId"
        );
    }

    #[test]
    fn test_close_room_error_mapping() {
        // テスト項目: CloseRoomError が 404 / 403 / 500 に変換される
        let not_found = ApiError::from(CloseRoomError::RoomNotFound("r1".to_string()));
        let forbidden = ApiError::from(CloseRoomError::Forbidden(RoomError::NotHost {
            room_id: "r1".to_string(),
            caller: "h2".to_string(),
        }));
        let internal = ApiError::from(CloseRoomError::Repository(RepositoryError::Unavailable(
            "down".to_string(),
        )));

        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.to_string(), "Room not found");
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            forbidden.to_string(),
            "Forbidden: Only the host can close the room"
        );
        assert_eq!(internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
