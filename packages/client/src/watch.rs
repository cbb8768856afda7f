//! WebSocket watcher for the comments of one room.

use futures_util::{SinkExt, StreamExt};
use live_comment_server::infrastructure::dto::{
    http::CommentDto,
    websocket::{ActionAck, ClientFrame},
};
use serde::Deserialize;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use crate::error::ClientError;

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Something that happened on a watched room
#[derive(Debug, Clone, PartialEq)]
pub enum WatchEvent {
    /// The server accepted the join
    Joined { room_id: String },
    /// The server refused the join (e.g. 404 for an unknown room)
    Rejected { status_code: u16, message: String },
    /// A comment was posted to the room
    Comment(CommentDto),
}

/// Frames sent by the server: acks carry `statusCode`, pushes are comments.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ServerFrame {
    Ack(ActionAck),
    Comment(CommentDto),
}

/// Connection that joined a room and yields its events
pub struct RoomWatcher {
    stream: WsStream,
    room_id: String,
}

impl RoomWatcher {
    /// Connect to `ws_url` and ask to join `room_id`.
    ///
    /// The join result arrives as the first event.
    pub async fn connect(ws_url: &str, room_id: &str) -> Result<Self, ClientError> {
        let (mut stream, _) = connect_async(ws_url).await?;
        tracing::info!("Connected to {}", ws_url);

        let frame = serde_json::to_string(&ClientFrame::join_room(room_id))?;
        stream.send(Message::Text(frame.into())).await?;

        Ok(Self {
            stream,
            room_id: room_id.to_string(),
        })
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Wait for the next event. `Ok(None)` means the server closed the socket.
    pub async fn next_event(&mut self) -> Result<Option<WatchEvent>, ClientError> {
        while let Some(msg) = self.stream.next().await {
            match msg? {
                Message::Text(text) => return parse_event(&self.room_id, text.as_str()).map(Some),
                Message::Close(_) => return Ok(None),
                _ => {}
            }
        }
        Ok(None)
    }

    /// Close the socket politely.
    pub async fn close(mut self) -> Result<(), ClientError> {
        self.stream.close(None).await?;
        Ok(())
    }
}

fn parse_event(room_id: &str, text: &str) -> Result<WatchEvent, ClientError> {
    let event = match serde_json::from_str::<ServerFrame>(text)? {
        ServerFrame::Ack(ack) if ack.is_success() => WatchEvent::Joined {
            room_id: room_id.to_string(),
        },
        ServerFrame::Ack(ack) => WatchEvent::Rejected {
            status_code: ack.status_code,
            message: ack.message.unwrap_or_default(),
        },
        ServerFrame::Comment(comment) => WatchEvent::Comment(comment),
    };
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_ack() {
        // テスト項目: 成功の ack は Joined になる
        let event = parse_event("r1", r#"{"action":"joinRoom","statusCode":200}"#).unwrap();
        assert_eq!(
            event,
            WatchEvent::Joined {
                room_id: "r1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_error_ack() {
        // テスト項目: エラーの ack は Rejected になりメッセージが保持される
        let event = parse_event(
            "r1",
            r#"{"action":"joinRoom","statusCode":404,"message":"Room not found"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            WatchEvent::Rejected {
                status_code: 404,
                message: "Room not found".to_string()
            }
        );
    }

    #[test]
    fn test_parse_comment() {
        // テスト項目: statusCode のないフレームはコメントとして解釈される
        // given (前提条件):
        let json = r#"{"roomId":"r1","commentId":"c1","content":"hello","nickname":"Anonymous","createdAt":"2024-01-01T00:00:00.000Z"}"#;

        // when (操作):
        let event = parse_event("r1", json).unwrap();

        // then (期待する結果):
        match event {
            WatchEvent::Comment(comment) => {
                assert_eq!(comment.content, "hello");
                assert_eq!(comment.nickname, "Anonymous");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_parse_garbage() {
        // テスト項目: 解釈できないフレームは Json エラーになる
        assert!(matches!(
            parse_event("r1", r#"{"foo":1}"#),
            Err(ClientError::Json(_))
        ));
    }
}
