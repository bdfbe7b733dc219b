//! HTTP server command
//!
//! Connects to PostgreSQL, makes sure the tables exist, then serves the
//! users and messages API until Ctrl+C or SIGTERM.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use postbox_server::{create_pool, ensure_schema, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Interface to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Do not create missing tables on startup
    #[arg(long)]
    pub skip_schema: bool,
}

impl ServeArgs {
    fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .as_deref()
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ./.env")?;

    let config = ServerConfig {
        bind_addr: args.bind_addr(),
    };
    tracing::info!("Starting postbox server on {}", config.bind_addr);

    let pool = create_pool(database_url)
        .await
        .context("Failed to create database pool")?;

    if args.skip_schema {
        tracing::info!("Skipping schema bootstrap");
    } else {
        ensure_schema(&pool)
            .await
            .context("Failed to create tables")?;
    }

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
