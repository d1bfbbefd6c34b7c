//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes string extraction to AI
//! assistants, so they can inspect what a project's resource scripts would
//! hand to translators.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{RcStringsMcpServer, run_server};
