//! bpdocs CLI — render a simulator's blueprint catalog as Markdown.
//!
//! Connects to a running simulator, fetches every actor blueprint with its
//! attributes, and writes the grouped library document.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli).await
}
