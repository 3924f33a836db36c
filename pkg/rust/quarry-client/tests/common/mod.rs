// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

use std::sync::Arc;

use quarry_catalog::CatalogStore;
use quarry_client::{AdminClient, ClientConfig};
use quarry_network::{AdminSubsystem, ServerConfig};

/// Boot a server on an ephemeral port and return it with the port.
pub async fn start_server() -> (AdminSubsystem, u16) {
	start_server_with_config(ServerConfig::new().with_bind_addr("127.0.0.1:0")).await
}

#[allow(dead_code)]
pub async fn start_server_with_config(config: ServerConfig) -> (AdminSubsystem, u16) {
	let store = Arc::new(CatalogStore::new());
	let mut server = AdminSubsystem::new(config, store);
	server.start().await.unwrap();
	let port = server.port().unwrap();
	(server, port)
}

pub fn client_for(port: u16) -> AdminClient {
	AdminClient::new(ClientConfig::new().with_host("127.0.0.1").with_port(port))
}

/// Close the client and drain the server.
pub async fn cleanup(mut server: AdminSubsystem, client: AdminClient) {
	let _ = client.close().await;
	let _ = server.shutdown().await;
}
