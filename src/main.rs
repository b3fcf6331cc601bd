//! Board MCP Server - Main Entry Point
//!
//! This is the main entry point for the task board MCP server application.
//! The actual implementation is in the `taskboard_mcp` library.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use taskboard_mcp::BoardServerHandler;
use tracing_subscriber::EnvFilter;

/// Task Board MCP Server - hierarchical project/milestone/task tracking via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the board data file
    file: String,

    /// Log filter directive (e.g. "taskboard_mcp=debug")
    #[arg(long, default_value = "warn")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();

    // Logs go to stderr; stdout carries the MCP wire protocol
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let handler = BoardServerHandler::new(&args.file)?;
    serve_stdio(handler).await?;
    Ok(())
}
