//! postbox CLI - users and per-user message queue over HTTP
//!
//! Entry point for the postbox server binary:
//! - `.env` loading for DATABASE_URL / PORT
//! - console tracing setup
//! - `serve` subcommand

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "postbox",
    author,
    version,
    about = "HTTP API for users and their queued messages, backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing so clap's env fallbacks see .env values.
    // Variables already in the environment are not overwritten.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
