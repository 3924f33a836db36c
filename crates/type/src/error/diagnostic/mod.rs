// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Diagnostic constructors, grouped by domain.
//!
//! Each function builds a [`Diagnostic`] with a stable code. Codes are part
//! of the protocol contract: clients branch on them, and tests assert them.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod auth;
pub mod catalog;
pub mod internal;
pub mod network;
pub mod schema;

/// A structured error payload.
///
/// Diagnostics serialize with serde so that error responses carry them
/// across the wire losslessly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}
