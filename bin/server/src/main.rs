// Copyright (c) quarry.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use quarry_catalog::CatalogStore;
use quarry_network::{AdminSubsystem, ServerConfig};
use tracing_subscriber::EnvFilter;

/// Builds the server configuration from the environment.
///
/// `QUARRY_BIND_ADDR` overrides the listen address, `QUARRY_USERNAME`
/// and `QUARRY_PASSWORD` together enable authentication, and
/// `QUARRY_MAX_CONNECTIONS` bounds concurrent connections.
fn config_from_env() -> ServerConfig {
	let mut config = ServerConfig::new();
	if let Ok(bind_addr) = std::env::var("QUARRY_BIND_ADDR") {
		config = config.with_bind_addr(bind_addr);
	}
	if let (Ok(username), Ok(password)) = (std::env::var("QUARRY_USERNAME"), std::env::var("QUARRY_PASSWORD")) {
		config = config.with_credentials(username, password);
	}
	if let Some(max_connections) =
		std::env::var("QUARRY_MAX_CONNECTIONS").ok().and_then(|value| value.parse().ok())
	{
		config = config.with_max_connections(max_connections);
	}
	config
}

#[tokio::main]
async fn main() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.try_init();

	let store = Arc::new(CatalogStore::new());
	let mut server = AdminSubsystem::new(config_from_env(), store);

	server.start().await.unwrap();

	tokio::signal::ctrl_c().await.unwrap();
	tracing::info!("Shutdown signal received");

	server.shutdown().await.unwrap();
}
