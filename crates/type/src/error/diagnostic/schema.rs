// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Diagnostics for malformed schema descriptions.
//!
//! These are raised by the schema translator before anything touches the
//! wire; correcting the input is the only recovery.

use crate::error::diagnostic::Diagnostic;

pub fn column_missing_type(column: &str) -> Diagnostic {
	Diagnostic {
		code: "SC_001".to_string(),
		message: format!("column '{}' declares no usable type", column),
		label: Some("missing column type".to_string()),
		help: Some("Every column needs a 'type' property with a string value, e.g. \"type\": \"TEXT\"".to_string()),
		notes: vec![],
	}
}

pub fn missing_partition_key() -> Diagnostic {
	Diagnostic {
		code: "SC_002".to_string(),
		message: "table declares no partition key column".to_string(),
		label: Some("empty partition key".to_string()),
		help: Some("Mark at least one column with \"partition_key\": true".to_string()),
		notes: vec!["A table without a partition key has no physical placement".to_string()],
	}
}

pub fn unknown_column_reference(column: &str, role: &str) -> Diagnostic {
	Diagnostic {
		code: "SC_003".to_string(),
		message: format!("{} references undeclared column '{}'", role, column),
		label: Some("unknown column".to_string()),
		help: Some("Key, index, and encryption references must name a declared column".to_string()),
		notes: vec![],
	}
}

pub fn unknown_data_type(column: &str, value: &str) -> Diagnostic {
	Diagnostic {
		code: "SC_004".to_string(),
		message: format!("column '{}' has unrecognized data type '{}'", column, value),
		label: Some("unknown data type".to_string()),
		help: Some(
			"Valid types: BOOLEAN, INT, BIGINT, FLOAT, DOUBLE, TEXT, BLOB, DATE, TIME, TIMESTAMP, TIMESTAMPTZ"
				.to_string(),
		),
		notes: vec![],
	}
}

pub fn unknown_sort_order(column: &str, value: &str) -> Diagnostic {
	Diagnostic {
		code: "SC_005".to_string(),
		message: format!("clustering order for column '{}' has unrecognized value '{}'", column, value),
		label: Some("unknown sort order".to_string()),
		help: Some("Valid orders: ASC, DESC".to_string()),
		notes: vec![],
	}
}
