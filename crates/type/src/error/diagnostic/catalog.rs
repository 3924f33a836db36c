// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Diagnostics for namespace and table existence preconditions.

use crate::error::diagnostic::Diagnostic;

pub fn namespace_already_exists(namespace: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_001".to_string(),
		message: format!("namespace '{}' already exists", namespace),
		label: Some("namespace already exists".to_string()),
		help: Some("Use a different name, or set if_not_exists to make the create a no-op".to_string()),
		notes: vec![],
	}
}

pub fn namespace_not_found(namespace: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_002".to_string(),
		message: format!("namespace '{}' not found", namespace),
		label: Some("unknown namespace".to_string()),
		help: Some("Create the namespace first, or check the name for typos".to_string()),
		notes: vec![],
	}
}

pub fn table_already_exists(namespace: &str, table: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_003".to_string(),
		message: format!("table '{}.{}' already exists", namespace, table),
		label: Some("table already exists".to_string()),
		help: Some("Use a different name, or set if_not_exists to make the create a no-op".to_string()),
		notes: vec![],
	}
}

pub fn table_not_found(namespace: &str, table: &str) -> Diagnostic {
	Diagnostic {
		code: "CA_004".to_string(),
		message: format!("table '{}.{}' not found", namespace, table),
		label: Some("unknown table".to_string()),
		help: Some("Create the table first, or check the name for typos".to_string()),
		notes: vec![],
	}
}
