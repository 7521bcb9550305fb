use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use pagescan::{config::Cli, lifecycle};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    lifecycle::init_logging();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    pagescan::run(cli.target(), &mut out).await?;
    out.flush().context("Failed to write report")?;
    Ok(())
}
