//! Terminal formatting for rooms, comments and streams.

use chrono::{DateTime, Local};
use live_comment_server::infrastructure::dto::http::{CommentDto, RoomDto};

use crate::api::Stream;

/// Convert an RFC 3339 timestamp to local `YYYY-MM-DD HH:MM:SS`.
///
/// Unparseable input is returned as is.
pub fn format_time(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(time) => time
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

pub fn format_comment(comment: &CommentDto) -> String {
    format!(
        "[{}] {}: {}",
        format_time(&comment.created_at),
        comment.nickname,
        comment.content
    )
}

pub fn format_room(room: &RoomDto) -> String {
    format!(
        "{}  {:<6}  {}  (created {})",
        room.room_id,
        room.status,
        room.name,
        format_time(&room.created_at)
    )
}

pub fn format_stream(stream: &Stream) -> String {
    let live = if stream.is_live { "LIVE" } else { "off" };
    let viewers = stream
        .viewers
        .map(|v| format!(", {v} viewers"))
        .unwrap_or_default();
    format!(
        "{}  [{}]  {} by {}{}",
        stream.id, live, stream.title, stream.creator, viewers
    )
}
