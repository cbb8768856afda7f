//! Router construction and server entry point.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::ServerConfig,
    ui::{
        error::ServerError,
        handler::{
            close_room, create_room, health_check, list_comments, list_rooms, post_comment,
            websocket_handler,
        },
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Build the application router on top of `state`.
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/rooms", post(create_room).get(list_rooms))
        .route("/rooms/{room_id}", patch(close_room))
        .route(
            "/rooms/{room_id}/comments",
            post(post_comment).get(list_comments),
        )
        .route("/ws", get(websocket_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let state = Arc::new(AppState::in_memory());
    let app = create_app(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}
