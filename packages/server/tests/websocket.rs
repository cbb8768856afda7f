//! WebSocket integration tests.
//!
//! Tests for joining rooms and receiving pushed comments.

mod fixtures;
use std::time::Duration;

use fixtures::TestServer;
use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio_tungstenite::{connect_async, tungstenite::Message};

type WsStream =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

async fn connect(server: &TestServer) -> WsStream {
    let (stream, _) = connect_async(server.ws_url())
        .await
        .expect("Failed to connect");
    stream
}

async fn send_json(stream: &mut WsStream, value: Value) {
    stream
        .send(Message::Text(value.to_string().into()))
        .await
        .expect("Failed to send frame");
}

async fn next_json(stream: &mut WsStream) -> Value {
    loop {
        let msg = tokio::time::timeout(Duration::from_secs(5), stream.next())
            .await
            .expect("Timed out waiting for a frame")
            .expect("Stream closed")
            .expect("WebSocket error");
        if let Message::Text(text) = msg {
            return serde_json::from_str(text.as_str()).expect("Frame is not JSON");
        }
    }
}

#[tokio::test]
async fn test_join_room_and_receive_comment() {
    // テスト項目: ルームに参加した接続に投稿されたコメントが配信される
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let room: Value = client
        .post(format!("{}/rooms", server.base_url()))
        .json(&json!({"name": "Live", "hostId": "host-1"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let room_id = room["roomId"].as_str().unwrap().to_string();

    let mut viewer = connect(&server).await;
    send_json(&mut viewer, json!({"action": "joinRoom", "roomId": &room_id})).await;
    let ack = next_json(&mut viewer).await;
    assert_eq!(ack["action"], "joinRoom");
    assert_eq!(ack["statusCode"], 200);

    // when (操作):
    let posted: Value = client
        .post(format!("{}/rooms/{}/comments", server.base_url(), room_id))
        .json(&json!({"content": "hello", "nickname": "bob"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    let pushed = next_json(&mut viewer).await;
    assert_eq!(pushed, posted);
    assert_eq!(pushed["content"], "hello");
    assert_eq!(pushed["nickname"], "bob");
}

#[tokio::test]
async fn test_join_unknown_room() {
    // テスト項目: 存在しないルームへの参加は 404 の ack になる
    let server = TestServer::start().await;
    let mut stream = connect(&server).await;

    send_json(&mut stream, json!({"action": "joinRoom", "roomId": "missing"})).await;
    let ack = next_json(&mut stream).await;

    assert_eq!(ack["statusCode"], 404);
    assert_eq!(ack["message"], "Room not found");
}

#[tokio::test]
async fn test_join_without_room_id() {
    // テスト項目: roomId のない joinRoom は 400 の ack になる
    let server = TestServer::start().await;
    let mut stream = connect(&server).await;

    send_json(&mut stream, json!({"action": "joinRoom"})).await;
    let ack = next_json(&mut stream).await;

    assert_eq!(ack["statusCode"], 400);
    assert_eq!(ack["message"], "Missing required parameter: roomId");
}

#[tokio::test]
async fn test_comments_stay_in_their_room() {
    // テスト項目: 別のルームに参加した接続にはコメントが配信されない
    // given (前提条件):
    let server = TestServer::start().await;
    let client = reqwest::Client::new();
    let mut room_ids = Vec::new();
    for name in ["A", "B"] {
        let room: Value = client
            .post(format!("{}/rooms", server.base_url()))
            .json(&json!({"name": name, "hostId": "host-1"}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        room_ids.push(room["roomId"].as_str().unwrap().to_string());
    }
    let mut viewer = connect(&server).await;
    send_json(&mut viewer, json!({"action": "joinRoom", "roomId": room_ids[1]})).await;
    assert_eq!(next_json(&mut viewer).await["statusCode"], 200);

    // when (操作): ルーム A に投稿
    client
        .post(format!("{}/rooms/{}/comments", server.base_url(), room_ids[0]))
        .json(&json!({"content": "only for A"}))
        .send()
        .await
        .unwrap();

    // then (期待する結果): ルーム B の接続には何も届かない
    let received = tokio::time::timeout(Duration::from_millis(300), viewer.next()).await;
    assert!(received.is_err(), "unexpected frame: {received:?}");
}
