//! tasklist-server - serve the in-memory task list over HTTP.
//!
//! # Environment Variables
//!
//! - `TASKLIST_HOST` - bind address (default `0.0.0.0`)
//! - `TASKLIST_PORT` - listening port (default `8080`)
//! - `TASKLIST_NO_SEED` - start with an empty task list
//! - `TASKLIST_LOG_FORMAT` - `text` or `json`
//! - `TASKLIST_MAX_BODY_BYTES` - request body limit
//! - `RUST_LOG` - tracing filter
//!
//! # Examples
//!
//! ```bash
//! tasklist-server --port 9000
//! curl -X POST localhost:9000/create -d '{"title":"Task 4","details":"Fourth"}'
//! curl 'localhost:9000/task?id=4'
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tasklist::{server, telemetry, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    telemetry::init_tracing(config.log_format)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        seeded = !config.no_seed,
        max_body_bytes = config.max_body_bytes,
        "Starting tasklist server..."
    );

    server::run(config).await
}
