// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

use crate::error::diagnostic::Diagnostic;

/// An invariant violation that should never occur in normal operation.
pub fn internal(message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "INTERNAL_001".to_string(),
		message: message.into(),
		label: Some("internal error".to_string()),
		help: Some("This is a bug; please report it with the message above".to_string()),
		notes: vec![],
	}
}
