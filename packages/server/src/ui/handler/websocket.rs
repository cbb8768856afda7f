//! WebSocket connection handlers.
//!
//! A socket is accepted without any persisted state. Clients then send
//! `{"action":"joinRoom","roomId":...}` frames and receive an `ActionAck` for
//! each, followed by every comment posted to the joined room.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, ConnectionIdFactory, RoomId, Timestamp},
    infrastructure::dto::websocket::{ActionAck, ClientFrame, JOIN_ROOM_ACTION},
    ui::{error::ApiError, extract::required, state::AppState},
    usecase::{ConnectUseCase, DisconnectUseCase, JoinRoomUseCase},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let connection_id = ConnectionIdFactory::generate();
    ConnectUseCase::new().execute(&connection_id);

    ws.on_upgrade(move |socket| handle_socket(socket, state, connection_id))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, connection_id: ConnectionId) {
    let (mut sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive pushes and acks
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    state
        .connections
        .register(connection_id.clone(), tx.clone(), Timestamp::now())
        .await;
    tracing::info!(
        "Connection '{}' registered ({} live)",
        connection_id,
        state.connections.count().await
    );

    let recv_state = state.clone();
    let recv_connection_id = connection_id.clone();

    // Spawn a task to handle frames from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error on '{}': {}", recv_connection_id, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received frame from '{}': {}", recv_connection_id, text);
                    let ack = handle_frame(&recv_state, &recv_connection_id, text.as_str()).await;
                    match serde_json::to_string(&ack) {
                        Ok(json) => {
                            if tx.send(json).is_err() {
                                break;
                            }
                        }
                        Err(e) => tracing::error!("Failed to serialize ack: {}", e),
                    }
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("Connection '{}' requested close", recv_connection_id);
                    break;
                }
                _ => {}
            }
        }
    });

    // Spawn a task to forward queued messages to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    disconnect(&state, &connection_id).await;
}

/// Forget a closed socket: drop its sender and delete its connection record.
///
/// The "disconnected" line is logged by `DisconnectUseCase`.
async fn disconnect(state: &AppState, connection_id: &ConnectionId) {
    if let Some(connected_at) = state.connections.unregister(connection_id).await {
        tracing::debug!(
            "Connection '{}' was open for {} ms",
            connection_id,
            Timestamp::now().value() - connected_at.value()
        );
    }
    let disconnect_usecase = DisconnectUseCase::new(state.connection_repository.clone());
    if let Err(e) = disconnect_usecase.execute(connection_id).await {
        tracing::error!(
            "Failed to remove connection record '{}': {}",
            connection_id,
            e
        );
    }
}

/// Route one client frame by its action and build the reply.
async fn handle_frame(state: &AppState, connection_id: &ConnectionId, text: &str) -> ActionAck {
    let frame = match serde_json::from_str::<ClientFrame>(text) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!("Failed to parse frame from '{}': {}", connection_id, e);
            return ActionAck::error(None, 400, "Invalid JSON frame");
        }
    };

    let action = frame.action.clone();
    let result = match action.as_deref() {
        Some(JOIN_ROOM_ACTION) => join_room(state, connection_id, frame.room_id).await,
        Some(other) => Err(ApiError::Validation(format!("Unknown action: {other}"))),
        None => Err(ApiError::missing_parameter("action")),
    };

    match result {
        Ok(()) => ActionAck::ok(action),
        Err(e) => ActionAck::error(action, e.status_code().as_u16(), e.public_message()),
    }
}

async fn join_room(
    state: &AppState,
    connection_id: &ConnectionId,
    room_id: Option<String>,
) -> Result<(), ApiError> {
    let Some(room_id) = required(room_id) else {
        return Err(ApiError::missing_parameter("roomId"));
    };
    let room_id = RoomId::new(room_id)?;

    let usecase = JoinRoomUseCase::new(
        state.room_repository.clone(),
        state.connection_repository.clone(),
    );
    usecase.execute(connection_id.clone(), room_id).await?;
    Ok(())
}
