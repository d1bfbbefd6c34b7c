//! rcstrings - translatable string extraction for Windows resource scripts
//!
//! rcstrings is a CLI tool and library that reads `.rc` files and pulls out
//! every string a localization pipeline needs to translate: menu labels,
//! dialog captions and control texts, and string table entries.
//!
//! ## Module Structure
//!
//! - `analysis`: Project file discovery, decoding and batch extraction
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `extraction`: The resource script scanner
//! - `mcp`: Model Context Protocol server implementation

pub mod analysis;
pub mod cli;
pub mod config;
pub mod extraction;
pub mod mcp;
