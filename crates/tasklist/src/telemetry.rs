//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "tasklist=info,tasklist_server=info,tower_http=info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_FILTER`].
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(fmt::layer()).try_init()?,
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
    }

    Ok(())
}
