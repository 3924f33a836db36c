// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Request side of the administrative protocol.
//!
//! Requests are JSON messages with a correlation `id`, a routing
//! [`RequestHeader`] and a payload discriminated by `type`.

use std::collections::BTreeMap;

use quarry_catalog::TableMetadata;
use serde::{Deserialize, Serialize};

/// Default hop limit stamped into request headers.
pub const DEFAULT_HOP_LIMIT: u8 = 10;

#[derive(Debug, Serialize, Deserialize)]
pub struct Request {
	pub id: String,
	pub header: RequestHeader,
	#[serde(flatten)]
	pub payload: RequestPayload,
}

/// Routing and authentication envelope carried by every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestHeader {
	/// Remaining routing hops. A request arriving with 0 is rejected.
	#[serde(default = "default_hop_limit")]
	pub hop_limit: u8,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub auth_token: Option<String>,
}

impl Default for RequestHeader {
	fn default() -> Self {
		Self {
			hop_limit: DEFAULT_HOP_LIMIT,
			auth_token: None,
		}
	}
}

fn default_hop_limit() -> u8 {
	DEFAULT_HOP_LIMIT
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum RequestPayload {
	CreateNamespace(CreateNamespaceRequest),
	DropNamespace(DropNamespaceRequest),
	NamespaceExists(NamespaceExistsRequest),
	CreateTable(CreateTableRequest),
	DropTable(DropTableRequest),
	TableExists(TableExistsRequest),
	GetTableMetadata(GetTableMetadataRequest),
	ListNamespaces(ListNamespacesRequest),
	ListTables(ListTablesRequest),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateNamespaceRequest {
	pub name: String,
	pub options: BTreeMap<String, String>,
	pub if_not_exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DropNamespaceRequest {
	pub name: String,
	pub if_exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NamespaceExistsRequest {
	pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTableRequest {
	pub namespace: String,
	pub table: String,
	pub metadata: TableMetadata,
	pub options: BTreeMap<String, String>,
	pub if_not_exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DropTableRequest {
	pub namespace: String,
	pub table: String,
	pub if_exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TableExistsRequest {
	pub namespace: String,
	pub table: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetTableMetadataRequest {
	pub namespace: String,
	pub table: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListNamespacesRequest {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListTablesRequest {
	pub namespace: String,
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use crate::protocol::{
		CreateNamespaceRequest, DEFAULT_HOP_LIMIT, Request, RequestHeader, RequestPayload,
	};

	#[test]
	fn test_request_wire_format() {
		let request = Request {
			id: "7".to_string(),
			header: RequestHeader::default(),
			payload: RequestPayload::CreateNamespace(CreateNamespaceRequest {
				name: "ns1".to_string(),
				options: BTreeMap::new(),
				if_not_exists: true,
			}),
		};

		let value = serde_json::to_value(&request).unwrap();
		assert_eq!(value["id"], "7");
		assert_eq!(value["type"], "CreateNamespace");
		assert_eq!(value["payload"]["name"], "ns1");
		assert_eq!(value["payload"]["if_not_exists"], true);
		assert_eq!(value["header"]["hop_limit"], 10);
		// Absent credentials leave no token field behind
		assert!(value["header"].get("auth_token").is_none());
	}

	#[test]
	fn test_header_defaults() {
		let raw = r#"{
			"id": "1",
			"header": {},
			"type": "NamespaceExists",
			"payload": {"name": "ns1"}
		}"#;

		let request: Request = serde_json::from_str(raw).unwrap();
		assert_eq!(request.header.hop_limit, DEFAULT_HOP_LIMIT);
		assert_eq!(request.header.auth_token, None);
		assert!(matches!(request.payload, RequestPayload::NamespaceExists(_)));
	}
}
