//! Binary crate for the `nalssi` command-line tool.
//!
//! This crate focuses on:
//! - The interactive prompt loop
//! - Wiring the session state to the wttr.in client
//! - Human-friendly Korean output

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
