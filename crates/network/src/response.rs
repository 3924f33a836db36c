// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Response side of the administrative protocol.

use std::collections::BTreeMap;

use quarry_catalog::TableMetadata;
use quarry_type::Diagnostic;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Response {
	pub id: String,
	#[serde(flatten)]
	pub payload: ResponsePayload,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ResponsePayload {
	Ok(OkResponse),
	Exists(ExistsResponse),
	Metadata(MetadataResponse),
	Names(NamesResponse),
	Err(ErrResponse),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OkResponse {}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExistsResponse {
	pub exists: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MetadataResponse {
	pub metadata: TableMetadata,
	pub options: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NamesResponse {
	pub names: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrResponse {
	pub diagnostic: Diagnostic,
}

impl Response {
	pub fn ok(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			payload: ResponsePayload::Ok(OkResponse {}),
		}
	}

	pub fn exists(id: impl Into<String>, exists: bool) -> Self {
		Self {
			id: id.into(),
			payload: ResponsePayload::Exists(ExistsResponse {
				exists,
			}),
		}
	}

	pub fn metadata(id: impl Into<String>, metadata: TableMetadata, options: BTreeMap<String, String>) -> Self {
		Self {
			id: id.into(),
			payload: ResponsePayload::Metadata(MetadataResponse {
				metadata,
				options,
			}),
		}
	}

	pub fn names(id: impl Into<String>, names: Vec<String>) -> Self {
		Self {
			id: id.into(),
			payload: ResponsePayload::Names(NamesResponse {
				names,
			}),
		}
	}

	pub fn error(id: impl Into<String>, diagnostic: Diagnostic) -> Self {
		Self {
			id: id.into(),
			payload: ResponsePayload::Err(ErrResponse {
				diagnostic,
			}),
		}
	}
}
