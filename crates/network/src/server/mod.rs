// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! WebSocket server hosting the administrative protocol.

mod handler;
mod subsystem;

use std::sync::Arc;

use quarry_catalog::CatalogStore;

pub use subsystem::AdminSubsystem;

/// Runtime configuration of the administrative server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	bind_addr: String,
	username: Option<String>,
	password: Option<String>,
	max_connections: usize,
}

impl ServerConfig {
	pub fn new() -> Self {
		Self {
			bind_addr: "127.0.0.1:60051".to_string(),
			username: None,
			password: None,
			max_connections: 256,
		}
	}

	/// Address the listener binds to. Port 0 picks an ephemeral port,
	/// queryable through [`AdminSubsystem::port`] after start.
	pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
		self.bind_addr = bind_addr.into();
		self
	}

	/// Requires clients to authenticate with these credentials.
	pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
		self.username = Some(username.into());
		self.password = Some(password.into());
		self
	}

	pub fn with_max_connections(mut self, max_connections: usize) -> Self {
		self.max_connections = max_connections;
		self
	}

	pub fn bind_addr(&self) -> &str {
		&self.bind_addr
	}

	pub fn max_connections(&self) -> usize {
		self.max_connections
	}

	/// Token clients must present when credentials are configured.
	pub fn auth_token(&self) -> Option<String> {
		match (&self.username, &self.password) {
			(Some(username), Some(password)) => Some(format!("{username}:{password}")),
			_ => None,
		}
	}
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self::new()
	}
}

/// Shared state handed to every connection task.
#[derive(Clone)]
pub(crate) struct ServerState {
	pub(crate) store: Arc<CatalogStore>,
	pub(crate) auth_token: Option<String>,
}
