//! Server configuration, read from command line flags or environment variables.

use clap::Parser;

/// Live Comment server
#[derive(Debug, Clone, Parser)]
#[command(name = "live-comment-server", version, about)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "LIVE_COMMENT_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "LIVE_COMMENT_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "LIVE_COMMENT_LOG_LEVEL", default_value = "debug")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
