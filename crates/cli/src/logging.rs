//! Tracing subscriber setup.

/// Install the global subscriber.
///
/// Logs go to stderr; stdout carries the report. `RUST_LOG` adds directives
/// on top of the `info` default.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
