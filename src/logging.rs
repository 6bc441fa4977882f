use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize diagnostic logging on stderr.
///
/// Defaults to `warn` unless overridden by `AUDIO_SHELF_LOG`
/// (e.g. `AUDIO_SHELF_LOG=debug` to see every skipped file).
/// Stdout stays reserved for the run summary.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_env_var("AUDIO_SHELF_LOG")
        .with_default_directive(tracing::level_filters::LevelFilter::WARN.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
