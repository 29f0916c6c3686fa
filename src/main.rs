//! dock: a bottom taskbar panel controller, previewed against an in-memory host.
//!
//! Run with:  `RUST_LOG=info dock`

mod preview;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("dock v{} starting", env!("CARGO_PKG_VERSION"));

    preview::run().await
}
