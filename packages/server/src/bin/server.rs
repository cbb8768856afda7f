//! Live Comment server.
//!
//! Serves the room/comment HTTP API and the `/ws` WebSocket endpoint.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin live-comment-server -- --port 8080
//! ```

use clap::Parser;
use live_comment_server::ServerConfig;
use live_comment_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ServerConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    // Run the server
    if let Err(e) = live_comment_server::run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
