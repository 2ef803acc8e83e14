//! MCP (Model Context Protocol) server implementation using rmcp.
//!
//! The server exposes two tools in front of Spring Initializr:
//! `getSpringBootInitDetails` for the capability document and
//! `downloadSpringBootProject` for generating a project on disk.

mod handlers;
mod server;
mod tools;
pub mod types;

pub use handlers::run_mcp_server;
