// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::error::diagnostic::Diagnostic;

/// Token is missing, invalid, or does not match the server's credentials.
pub fn invalid_token() -> Diagnostic {
	Diagnostic {
		code: "AUTH_001".to_string(),
		message: "invalid or missing authentication token".to_string(),
		label: Some("authentication failed".to_string()),
		help: Some("Check the configured username and password".to_string()),
		notes: vec![],
	}
}
