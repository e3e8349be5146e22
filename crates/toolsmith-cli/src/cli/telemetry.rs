//! Log output for the CLI.
//!
//! Results are written to stdout, so every log line goes to stderr. The filter
//! comes from `RUST_LOG` and defaults to `warn`, which keeps normal runs
//! silent:
//!
//! ```bash
//! RUST_LOG=debug toolsmith uuid v1 --count 3
//! ```

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_FILTER: &str = "warn";

pub fn init_telemetry() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_line_number(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_file(true),
        )
        .try_init()?;
    Ok(())
}
