use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `FLASHDECK_LOG` overrides the configured
/// level; an unparsable directive falls back to `warn`.
pub fn init(configured: &str) {
    let filter = EnvFilter::try_from_env("FLASHDECK_LOG")
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
