// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

use std::{
	collections::BTreeMap,
	fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// A loosely-typed configuration value.
///
/// Schema descriptions arrive as maps of these: column properties, table
/// options, and the nested `clustering_order` map. The untagged serde
/// representation means callers write plain JSON scalars and objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
	/// A boolean: true or false.
	Bool(bool),
	/// A signed integer.
	Int(i64),
	/// A UTF-8 string.
	Utf8(String),
	/// A nested map of values.
	Nested(BTreeMap<String, OptionValue>),
}

impl OptionValue {
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			OptionValue::Bool(value) => Some(*value),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			OptionValue::Utf8(value) => Some(value),
			_ => None,
		}
	}

	pub fn as_nested(&self) -> Option<&BTreeMap<String, OptionValue>> {
		match self {
			OptionValue::Nested(map) => Some(map),
			_ => None,
		}
	}
}

impl From<bool> for OptionValue {
	fn from(value: bool) -> Self {
		OptionValue::Bool(value)
	}
}

impl From<i64> for OptionValue {
	fn from(value: i64) -> Self {
		OptionValue::Int(value)
	}
}

impl From<&str> for OptionValue {
	fn from(value: &str) -> Self {
		OptionValue::Utf8(value.to_string())
	}
}

impl From<String> for OptionValue {
	fn from(value: String) -> Self {
		OptionValue::Utf8(value)
	}
}

impl From<BTreeMap<String, OptionValue>> for OptionValue {
	fn from(value: BTreeMap<String, OptionValue>) -> Self {
		OptionValue::Nested(value)
	}
}

/// Canonical textual rendering: decimal integers, `true`/`false` booleans,
/// strings verbatim. Nested maps render through a generic fallback that
/// exists to avoid hard failure, not to be parsed back.
impl Display for OptionValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			OptionValue::Bool(value) => write!(f, "{}", value),
			OptionValue::Int(value) => write!(f, "{}", value),
			OptionValue::Utf8(value) => f.write_str(value),
			OptionValue::Nested(map) => {
				f.write_str("{")?;
				for (i, (key, value)) in map.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", key, value)?;
				}
				f.write_str("}")
			}
		}
	}
}
