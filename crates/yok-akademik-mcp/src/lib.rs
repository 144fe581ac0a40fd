//! YOK Akademik MCP Server
//!
//! A Model Context Protocol (MCP) server for the YOK Akademik API.
//! Exposes Turkish academic profile search and co-author lookup as
//! callable tools returning plain-text blocks.
//!
//! # Features
//!
//! - **3 MCP Tools**: profile search, collaborator lookup, backend info
//! - **Stateless**: one outbound request per call, no caching or retries
//! - **Two transports**: stdio (Claude Desktop) and streamable HTTP
//!
//! # Example
//!
//! ```no_run
//! use yok_akademik_mcp::{YokAkademikClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = YokAkademikClient::new(config)?;
//!
//!     // Use client for API calls
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod formatters;
pub mod models;
pub mod server;
pub mod tools;

pub use client::YokAkademikClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
