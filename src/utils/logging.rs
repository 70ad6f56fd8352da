use std::env;

use tracing_subscriber::EnvFilter;

/// Check if DEBUG environment variable is set to enable verbose debug output
pub fn is_debug_enabled() -> bool {
    env::var("DEBUG")
        .map(|val| !val.is_empty() && val != "0" && val.to_lowercase() != "false")
        .unwrap_or(false)
}

/// Default filter when RUST_LOG is not set: `info`, or `debug` for this crate
/// when DEBUG is set.
pub fn default_filter(debug: bool) -> EnvFilter {
    let crate_level = if debug { "debug" } else { "info" };
    EnvFilter::new("info")
        .add_directive("mongodb=warn".parse().expect("static directive"))
        .add_directive(
            format!("phimkhoi_tools={}", crate_level)
                .parse()
                .expect("static directive"),
        )
}

/// Initialize tracing for a CLI binary. Logs go to stderr so stdout only
/// carries the tool's own output.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(is_debug_enabled()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
