//! Logger setup built on `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence when set. Otherwise logs from the binary's own
/// crate and from `tower_http` are emitted at `default_level`.
///
/// # Arguments
///
/// * `bin_name` - Binary name, usually `env!("CARGO_BIN_NAME")`
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. `"debug"`)
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    // A second call (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

/// Build the default filter directives for a binary.
///
/// Cargo binary names use `-` while tracing targets use the crate path with `_`.
fn default_directives(bin_name: &str, default_level: &str) -> String {
    let target = bin_name.replace('-', "_");
    format!("{target}={default_level},tower_http={default_level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_normalizes_bin_name() {
        // テスト項目: バイナリ名のハイフンがアンダースコアに変換される
        // when (操作):
        let directives = default_directives("live-comment-server", "debug");

        // then (期待する結果):
        assert_eq!(directives, "live_comment_server=debug,tower_http=debug");
    }

    #[test]
    fn test_setup_logger_twice_does_not_panic() {
        // テスト項目: setup_logger を複数回呼び出してもパニックしない
        setup_logger("live-comment-server", "info");
        setup_logger("live-comment-server", "info");
    }
}
