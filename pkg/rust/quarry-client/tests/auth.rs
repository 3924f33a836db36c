// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

mod common;

use common::{cleanup, start_server_with_config};
use quarry_client::{AdminClient, ClientConfig, OptionsConfig};
use quarry_network::ServerConfig;

fn secured_config() -> ServerConfig {
	ServerConfig::new().with_bind_addr("127.0.0.1:0").with_credentials("admin", "secret")
}

#[tokio::test]
async fn test_matching_credentials_pass() {
	let (server, port) = start_server_with_config(secured_config()).await;
	let mut client = AdminClient::new(
		ClientConfig::new().with_host("127.0.0.1").with_port(port).with_credentials("admin", "secret"),
	);

	client.create_namespace("ns1", &OptionsConfig::new()).await.unwrap();
	assert!(client.namespace_exists("ns1").await.unwrap());

	cleanup(server, client).await;
}

#[tokio::test]
async fn test_missing_credentials_rejected() {
	let (server, port) = start_server_with_config(secured_config()).await;
	let mut client = AdminClient::new(ClientConfig::new().with_host("127.0.0.1").with_port(port));

	let err = client.create_namespace("ns1", &OptionsConfig::new()).await.unwrap_err();
	assert_eq!(err.diagnostic().code, "AUTH_001");

	cleanup(server, client).await;
}

#[tokio::test]
async fn test_wrong_credentials_rejected() {
	let (server, port) = start_server_with_config(secured_config()).await;
	let mut client = AdminClient::new(
		ClientConfig::new().with_host("127.0.0.1").with_port(port).with_credentials("admin", "wrong"),
	);

	let err = client.namespace_exists("ns1").await.unwrap_err();
	assert_eq!(err.diagnostic().code, "AUTH_001");

	cleanup(server, client).await;
}

#[tokio::test]
async fn test_unsecured_server_ignores_tokens() {
	let (server, port) = start_server_with_config(ServerConfig::new().with_bind_addr("127.0.0.1:0")).await;
	let mut client = AdminClient::new(
		ClientConfig::new().with_host("127.0.0.1").with_port(port).with_credentials("any", "thing"),
	);

	client.create_namespace("ns1", &OptionsConfig::new()).await.unwrap();

	cleanup(server, client).await;
}
