//! scwkit CLI - Command-line interface for SCW container tools

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "scwkit")]
#[command(about = "scwkit: extract and repack SCW4.x script text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the scwkit CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
