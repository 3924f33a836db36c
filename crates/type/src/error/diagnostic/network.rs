// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Diagnostics for transport and protocol failures.

use std::fmt::Display;

use crate::error::diagnostic::Diagnostic;

pub fn connect_failed(url: &str, err: impl Display) -> Diagnostic {
	Diagnostic {
		code: "NET_001".to_string(),
		message: format!("failed to connect to '{}': {}", url, err),
		label: Some("connection failed".to_string()),
		help: Some("Check network connectivity and that the server is running".to_string()),
		notes: vec![],
	}
}

pub fn connection_closed() -> Diagnostic {
	Diagnostic {
		code: "NET_002".to_string(),
		message: "connection closed before the response arrived".to_string(),
		label: Some("connection closed".to_string()),
		help: Some("Retry the operation; the next call re-establishes the connection".to_string()),
		notes: vec![],
	}
}

pub fn unexpected_response(expected: &str) -> Diagnostic {
	Diagnostic {
		code: "NET_003".to_string(),
		message: format!("unexpected response type, expected {}", expected),
		label: Some("protocol mismatch".to_string()),
		help: Some("Check that client and server versions agree".to_string()),
		notes: vec![],
	}
}

pub fn bind_failed(addr: &str, err: impl Display) -> Diagnostic {
	Diagnostic {
		code: "NET_004".to_string(),
		message: format!("failed to bind to '{}': {}", addr, err),
		label: Some("bind failed".to_string()),
		help: Some("Check that the address is valid and the port is free".to_string()),
		notes: vec![],
	}
}

pub fn hop_limit_exhausted() -> Diagnostic {
	Diagnostic {
		code: "NET_005".to_string(),
		message: "request hop limit exhausted".to_string(),
		label: Some("hop limit reached zero".to_string()),
		help: Some("The request was forwarded too many times; check for routing loops".to_string()),
		notes: vec![],
	}
}

pub fn address_unavailable(err: impl Display) -> Diagnostic {
	Diagnostic {
		code: "NET_006".to_string(),
		message: format!("bound address unavailable: {}", err),
		label: Some("address unavailable".to_string()),
		help: None,
		notes: vec![],
	}
}

pub fn malformed_request(err: impl Display) -> Diagnostic {
	Diagnostic {
		code: "NET_007".to_string(),
		message: format!("malformed request: {}", err),
		label: Some("unparseable message".to_string()),
		help: Some("Check that the message is valid JSON in the administrative protocol shape".to_string()),
		notes: vec![],
	}
}
