// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Client connection configuration.

/// Where and how the client connects.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	host: String,
	port: u16,
	username: Option<String>,
	password: Option<String>,
}

impl ClientConfig {
	pub fn new() -> Self {
		Self {
			host: "127.0.0.1".to_string(),
			port: 60051,
			username: None,
			password: None,
		}
	}

	/// Reads configuration from the environment.
	///
	/// `QUARRY_HOST` and `QUARRY_PORT` override the connection target;
	/// `QUARRY_USERNAME` and `QUARRY_PASSWORD` together enable
	/// authentication. Unset or unparseable variables keep the defaults.
	pub fn from_env() -> Self {
		let mut config = Self::new();
		if let Ok(host) = std::env::var("QUARRY_HOST") {
			config.host = host;
		}
		if let Some(port) = std::env::var("QUARRY_PORT").ok().and_then(|port| port.parse().ok()) {
			config.port = port;
		}
		if let (Ok(username), Ok(password)) =
			(std::env::var("QUARRY_USERNAME"), std::env::var("QUARRY_PASSWORD"))
		{
			config.username = Some(username);
			config.password = Some(password);
		}
		config
	}

	pub fn with_host(mut self, host: impl Into<String>) -> Self {
		self.host = host.into();
		self
	}

	pub fn with_port(mut self, port: u16) -> Self {
		self.port = port;
		self
	}

	pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
		self.username = Some(username.into());
		self.password = Some(password.into());
		self
	}

	pub fn host(&self) -> &str {
		&self.host
	}

	pub fn port(&self) -> u16 {
		self.port
	}

	pub(crate) fn url(&self) -> String {
		format!("ws://{}:{}", self.host, self.port)
	}

	/// Token presented in request headers when credentials are set.
	pub fn auth_token(&self) -> Option<String> {
		match (&self.username, &self.password) {
			(Some(username), Some(password)) => Some(format!("{username}:{password}")),
			_ => None,
		}
	}
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use crate::config::ClientConfig;

	#[test]
	fn test_defaults() {
		let config = ClientConfig::new();
		assert_eq!(config.host(), "127.0.0.1");
		assert_eq!(config.port(), 60051);
		assert_eq!(config.auth_token(), None);
		assert_eq!(config.url(), "ws://127.0.0.1:60051");
	}

	#[test]
	fn test_builder() {
		let config = ClientConfig::new()
			.with_host("10.0.0.7")
			.with_port(7443)
			.with_credentials("admin", "secret");
		assert_eq!(config.url(), "ws://10.0.0.7:7443");
		assert_eq!(config.auth_token(), Some("admin:secret".to_string()));
	}

	#[test]
	fn test_from_env() {
		unsafe {
			std::env::set_var("QUARRY_HOST", "10.1.2.3");
			std::env::set_var("QUARRY_PORT", "7777");
			std::env::set_var("QUARRY_USERNAME", "admin");
			std::env::set_var("QUARRY_PASSWORD", "secret");
		}

		let config = ClientConfig::from_env();
		assert_eq!(config.host(), "10.1.2.3");
		assert_eq!(config.port(), 7777);
		assert_eq!(config.auth_token(), Some("admin:secret".to_string()));

		unsafe {
			std::env::remove_var("QUARRY_HOST");
			std::env::remove_var("QUARRY_PORT");
			std::env::remove_var("QUARRY_USERNAME");
			std::env::remove_var("QUARRY_PASSWORD");
		}
	}
}
