//! Shared fixtures for integration tests.

use std::sync::Arc;

use live_comment_server::{create_app, ui::AppState};
use tokio::net::TcpListener;

/// In-process server bound to an ephemeral port.
pub struct TestServer {
    addr: std::net::SocketAddr,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Start a server with fresh in-memory stores.
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let app = create_app(Arc::new(AppState::in_memory()));

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
