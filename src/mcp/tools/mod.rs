//! MCP tool implementations.
//!
//! Each tool is implemented in its own module for better organization.

mod common;
mod download;
mod metadata;

// Re-export tool functions
pub use download::download_project;
pub use metadata::get_init_details;
