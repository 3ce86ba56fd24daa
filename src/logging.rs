use tracing_subscriber::EnvFilter;

use crate::{Error, Result};

/// Logs to stderr, `info` and up unless `RUST_LOG` says otherwise.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|err| Error::Logging(err.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| Error::Logging(err.to_string()))?;

    Ok(())
}
