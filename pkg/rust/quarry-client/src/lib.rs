// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Administrative client SDK for Quarry.
//!
//! The client speaks the JSON administrative protocol over WebSocket.
//! Connections are established lazily on the first operation and
//! re-established on the next call after a failure.
//!
//! # Example
//!
//! ```no_run
//! use quarry_client::{AdminClient, ClientConfig, OptionsConfig};
//!
//! #[tokio::main]
//! async fn main() -> quarry_client::Result<()> {
//! 	let mut client = AdminClient::new(ClientConfig::from_env());
//! 	client.create_namespace("analytics", &OptionsConfig::new()).await?;
//! 	client.close().await
//! }
//! ```

mod admin;
mod config;
mod utils;

pub use admin::AdminClient;
pub use config::ClientConfig;
// Re-export the types the client surface is built from
pub use quarry_catalog::{ColumnConfig, OptionsConfig, TableMetadata, TranslateMode};
pub use quarry_type::{DataType, Error, OptionValue, Result, SortOrder};
