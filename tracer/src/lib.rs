use thiserror::Error;
use tracing::subscriber::set_global_default;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

#[derive(Error, Debug)]
pub enum TracerError {
    #[error("invalid log filter {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),
    #[error("could not bridge log records {0}")]
    LogBridge(#[from] log::SetLoggerError),
    #[error("could not set default subscriber {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs a global subscriber printing to stderr, filtered by `log_level` (e.g `info` or
/// `fixed_heap=debug`). Records emitted through `log` are forwarded as well.
pub fn init_log(log_level: Option<&str>) -> Result<(), TracerError> {
    let env_filter = EnvFilter::try_new(log_level.unwrap_or("info"))?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let subscriber = Registry::default().with(env_filter).with(stderr_layer);

    tracing_log::LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}
