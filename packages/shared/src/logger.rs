//! Logger setup backed by `tracing-subscriber`.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, the binary's own crate and the
/// marathon-chat crates log at `default_level` and everything else at `warn`.
///
/// Logs go to stderr so they never interleave with the chat transcript on
/// stdout. Calling this twice is harmless; the second call is ignored.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let bin_target = bin_name.replace('-', "_");
    format!(
        "warn,{bin_target}={default_level},marathon_chat_client={default_level},marathon_chat_shared={default_level}"
    )
}
