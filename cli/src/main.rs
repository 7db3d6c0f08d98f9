//! # hotlist CLI
//!
//! Command-line application shell for the chitchat hot list.
//!
//! ## Usage
//!
//! - `hotlist` - Start the interactive navigation loop
//! - `hotlist routes` - Print the route table
//! - `hotlist resolve <path>` - Resolve a path against the route table
//!
//! Serve configuration (host, port, base path, backend URL) is loaded from
//! a JSON config file, environment variables, and flag overrides.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod shell;
mod views;

use commands::{interactive_command, resolve_command, routes_command};
use config::CliConfigLoader;

/// hotlist - a client-side application shell for the chitchat hot list
#[derive(Parser)]
#[command(name = "hotlist")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A client-side application shell for the chitchat hot list")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dev server host override
    #[arg(long, env = "HOTLIST_HOST")]
    host: Option<String>,

    /// Dev server port override
    #[arg(long, env = "HOTLIST_PORT")]
    port: Option<u16>,

    /// Base path prefixed to hash locations
    #[arg(long, env = "HOTLIST_BASE")]
    base: Option<String>,

    /// Backend URL for the API client
    #[arg(long, env = "HOTLIST_SERVER")]
    server: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output mode (default is normal mode)
    #[arg(short = 'd', long = "debug")]
    debug_output: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,

    /// Resolve a path against the route table
    Resolve {
        /// Path or hash location to resolve
        path: String,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(host) = &cli.host {
        loader = loader.with_host_override(host.clone());
    }

    if let Some(port) = cli.port {
        loader = loader.with_port_override(port);
    }

    if let Some(base) = &cli.base {
        loader = loader.with_base_override(base.clone());
    }

    if let Some(server) = &cli.server {
        loader = loader.with_server_override(server.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose || cli.debug_output {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let config = build_config_loader(&cli).load()?;
    tracing::debug!(?config, "resolved serve configuration");

    match cli.command {
        Some(Commands::Routes) => routes_command(config).await,
        Some(Commands::Resolve { path }) => resolve_command(config, path).await,
        // Default to interactive mode
        None => interactive_command(config).await,
    }
}
