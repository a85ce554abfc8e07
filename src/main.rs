use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{debug, Level};

use parity_hex::{render, run_default};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(io::stderr)
        .init();

    let report = run_default().context("Failed to build the counter hex preview")?;

    debug!("Appended {} padding zeros", report.appended);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render(&report, &mut out).context("Failed to write preview to stdout")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
