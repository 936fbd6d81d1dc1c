//! Diagnostics for the CLI.
//!
//! Reads `RUST_LOG`, defaulting to `warn`. Output goes to stderr in compact
//! form so stdout stays pure JSON.
//!
//! ```bash
//! RUST_LOG=avl_trace=trace avl-trace -i ops.txt
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
