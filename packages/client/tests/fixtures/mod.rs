//! Shared fixtures for client integration tests.

use std::sync::Arc;

use axum::Router;
use live_comment_server::{create_app, ui::AppState};
use tokio::net::TcpListener;

/// Router served on an ephemeral port for the lifetime of the value.
pub struct TestServer {
    addr: std::net::SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start the comment server with fresh in-memory stores.
    pub async fn start() -> Self {
        Self::serve(create_app(Arc::new(AppState::in_memory()))).await
    }

    pub async fn serve(app: Router) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });
        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
