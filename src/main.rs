use anyhow::Result;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use typed_store::run;

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "typed_store=warn";

fn main() -> Result<()> {
    init_tracing();
    tracing::info!(version = typed_store::VERSION, "starting walkthrough");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&mut out)?;
    out.flush()?;

    Ok(())
}

/// Diagnostics go to stderr; stdout carries only the walkthrough
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
