use tracing_subscriber::EnvFilter;

/// Install the global subscriber on stderr; stdout belongs to the UI.
///
/// Filter precedence: `--log-level`, then `RUST_LOG`, then the config value.
pub fn init_tracing(cli_level: Option<&str>, config_level: &str, json: bool) {
    let filter = match cli_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config_level)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // A subscriber may already be installed, e.g. by tests
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
