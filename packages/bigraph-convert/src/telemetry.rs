//! Logging setup for the command-line tools

use tracing_subscriber::EnvFilter;

/// Filter directive for `-v` repetitions, or `fallback` when none were given
pub fn filter_directive(fallback: &str, verbosity: u8) -> String {
    match verbosity {
        0 => fallback.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install a stderr `fmt` subscriber
///
/// `RUST_LOG` wins when set; otherwise `directive` is used. Calling this
/// twice is harmless (the second install is ignored).
pub fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
