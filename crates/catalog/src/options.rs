// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Flat string codec for table options.
//!
//! Stored options are plain string pairs. Scalar values encode through
//! their canonical display form; nested maps flatten into dotted keys,
//! `clustering_order.ts = DESC` for example, and decode groups the
//! dotted keys back into their nested map.

use std::collections::BTreeMap;

use quarry_type::OptionValue;

use crate::translate::OptionsConfig;

/// Table option holding the per-column sort orders.
pub const CLUSTERING_ORDER: &str = "clustering_order";

/// Flattens structured options into string pairs.
pub fn encode(options: &OptionsConfig) -> BTreeMap<String, String> {
	let mut encoded = BTreeMap::new();
	for (name, value) in options {
		match value {
			OptionValue::Nested(entries) => {
				for (key, entry) in entries {
					encoded.insert(format!("{name}.{key}"), entry.to_string());
				}
			}
			scalar => {
				encoded.insert(name.clone(), scalar.to_string());
			}
		}
	}
	encoded
}

/// Rebuilds structured options from string pairs.
///
/// Dotted keys regroup into a nested map under their prefix; every other
/// value comes back as [`OptionValue::Utf8`]. The codec does not guess
/// at booleans or numbers, a stored `"true"` stays a string.
pub fn decode(encoded: &BTreeMap<String, String>) -> OptionsConfig {
	let mut options = OptionsConfig::new();
	for (name, value) in encoded {
		match name.split_once('.') {
			Some((prefix, key)) if !prefix.is_empty() && !key.is_empty() => {
				let nested = options
					.entry(prefix.to_string())
					.or_insert_with(|| OptionValue::Nested(BTreeMap::new()));
				if let OptionValue::Nested(entries) = nested {
					entries.insert(key.to_string(), OptionValue::from(value.as_str()));
				}
			}
			_ => {
				options.insert(name.clone(), OptionValue::from(value.as_str()));
			}
		}
	}
	options
}
