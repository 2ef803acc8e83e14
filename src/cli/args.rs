use clap::Parser;

use crate::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Spring Initializr MCP server - bootstrap Spring Boot projects from an MCP client
#[derive(Parser, Debug)]
#[command(name = "initializr-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the Spring Initializr instance
    #[arg(long, env = "INITIALIZR_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP read timeout in seconds
    #[arg(long, env = "INITIALIZR_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
