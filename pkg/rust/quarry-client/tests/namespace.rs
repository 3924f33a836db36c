// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

mod common;

use common::{cleanup, client_for, start_server};
use quarry_client::OptionsConfig;

#[tokio::test]
async fn test_create_and_drop_namespace() {
	let (server, port) = start_server().await;
	let mut client = client_for(port);

	client.create_namespace("ns1", &OptionsConfig::new()).await.unwrap();
	assert!(client.namespace_exists("ns1").await.unwrap());

	// Creates are idempotent, the second one is a no-op success
	client.create_namespace("ns1", &OptionsConfig::new()).await.unwrap();

	client.drop_namespace("ns1").await.unwrap();
	assert!(!client.namespace_exists("ns1").await.unwrap());

	// Drops are idempotent as well
	client.drop_namespace("ns1").await.unwrap();

	cleanup(server, client).await;
}

#[tokio::test]
async fn test_namespace_exists_reports_absent() {
	let (server, port) = start_server().await;
	let mut client = client_for(port);

	assert!(!client.namespace_exists("never_created").await.unwrap());

	cleanup(server, client).await;
}

#[tokio::test]
async fn test_list_namespaces() {
	let (server, port) = start_server().await;
	let mut client = client_for(port);

	assert_eq!(client.list_namespaces().await.unwrap(), Vec::<String>::new());

	for name in ["zulu", "alpha", "mike"] {
		client.create_namespace(name, &OptionsConfig::new()).await.unwrap();
	}

	// Names come back sorted regardless of creation order
	assert_eq!(
		client.list_namespaces().await.unwrap(),
		vec!["alpha".to_string(), "mike".to_string(), "zulu".to_string()]
	);

	cleanup(server, client).await;
}

#[tokio::test]
async fn test_drop_namespace_cascades() {
	let (server, port) = start_server().await;
	let mut client = client_for(port);

	client.create_namespace("ns1", &OptionsConfig::new()).await.unwrap();

	let mut columns = quarry_client::ColumnConfig::new();
	let mut id = std::collections::BTreeMap::new();
	id.insert("type".to_string(), quarry_client::OptionValue::from("INT"));
	id.insert("partition_key".to_string(), quarry_client::OptionValue::Bool(true));
	columns.insert("id".to_string(), id);
	client.create_table("ns1", "events", &columns, &OptionsConfig::new()).await.unwrap();

	client.drop_namespace("ns1").await.unwrap();

	// The nested table went down with the namespace
	assert!(!client.table_exists("ns1", "events").await.unwrap());

	cleanup(server, client).await;
}
