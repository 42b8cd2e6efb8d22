use std::io;

use anyhow::Result;
use tempo_proto::Session;
use tracing::info;

fn main() -> Result<()> {
    // stdout carries the answers; diagnostics go to stderr.
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("tempo starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock()).run()?;
    Ok(())
}
