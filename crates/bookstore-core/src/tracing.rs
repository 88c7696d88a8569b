use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install JSON tracing for the `catalog` shell, filtered by `RUST_LOG`.
///
/// Events go to stderr: stdout carries the book details and delete
/// confirmations the shell prints, so scripts can read them unmixed.
/// With `RUST_LOG` unset only errors are shown. Later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init();
}
