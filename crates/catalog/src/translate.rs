// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Translation between loose table configuration and [`TableMetadata`].
//!
//! Callers describe tables as string-keyed property maps. [`to_metadata`]
//! folds that shape into the canonical form, [`from_metadata`] unfolds it
//! again, and [`validate_metadata`] checks structural integrity of
//! metadata that arrives pre-built.

use std::{collections::BTreeMap, str::FromStr};

use quarry_type::{
	DataType, OptionValue, Result, SortOrder,
	diagnostic::schema::{
		column_missing_type, missing_partition_key, unknown_column_reference, unknown_data_type,
		unknown_sort_order,
	},
	return_error,
};

use crate::{metadata::TableMetadata, options::CLUSTERING_ORDER};

/// Column configuration: column name to property map.
pub type ColumnConfig = BTreeMap<String, BTreeMap<String, OptionValue>>;

/// Table-level options: option name to value.
pub type OptionsConfig = BTreeMap<String, OptionValue>;

/// Column property declaring the data type.
pub const TYPE: &str = "type";
/// Column property flagging partition key membership.
pub const PARTITION_KEY: &str = "partition_key";
/// Column property flagging clustering key membership.
pub const CLUSTERING_KEY: &str = "clustering_key";
/// Column property flagging a secondary index.
pub const SECONDARY_INDEX: &str = "secondary_index";
/// Column property flagging at-rest encryption.
pub const ENCRYPTED: &str = "encrypted";

/// How the translator treats names it does not recognize.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum TranslateMode {
	/// Unknown type names become [`DataType::Text`], unknown sort orders
	/// become [`SortOrder::Asc`].
	#[default]
	Lenient,
	/// Unknown names are rejected.
	Strict,
}

/// Builds canonical metadata from a column/options configuration.
///
/// Key columns are collected in name order. A column contributes to a
/// key or membership set only when the corresponding flag property is
/// boolean `true`; any other value is ignored.
pub fn to_metadata(columns: &ColumnConfig, options: &OptionsConfig, mode: TranslateMode) -> Result<TableMetadata> {
	let mut metadata = TableMetadata::default();

	for (name, properties) in columns {
		let Some(declared) = properties.get(TYPE).and_then(OptionValue::as_str) else {
			return_error!(column_missing_type(name));
		};
		let data_type = match DataType::from_str(declared) {
			Ok(data_type) => data_type,
			Err(()) => match mode {
				TranslateMode::Lenient => DataType::Text,
				TranslateMode::Strict => return_error!(unknown_data_type(name, declared)),
			},
		};
		metadata.columns.insert(name.clone(), data_type);

		if flag(properties, PARTITION_KEY) {
			metadata.partition_key_columns.push(name.clone());
		}
		if flag(properties, CLUSTERING_KEY) {
			metadata.clustering_key_columns.push(name.clone());
		}
		if flag(properties, SECONDARY_INDEX) {
			metadata.secondary_index_columns.insert(name.clone());
		}
		if flag(properties, ENCRYPTED) {
			metadata.encrypted_columns.insert(name.clone());
		}
	}

	let orders = options.get(CLUSTERING_ORDER).and_then(OptionValue::as_nested);
	// Orders attach to clustering key columns only; entries naming any
	// other column are ignored.
	for column in &metadata.clustering_key_columns {
		let order = match orders.and_then(|entries| entries.get(column)) {
			Some(value) => sort_order(column, value, mode)?,
			None => SortOrder::Asc,
		};
		metadata.clustering_orders.insert(column.clone(), order);
	}

	validate_metadata(&metadata)?;
	Ok(metadata)
}

/// Unfolds metadata back into the configuration shape.
///
/// The result is canonical: type names and sort orders in their uppercase
/// form, flags present only where they are set, and a `clustering_order`
/// option only when at least one clustering key column exists.
pub fn from_metadata(metadata: &TableMetadata) -> (ColumnConfig, OptionsConfig) {
	let mut columns = ColumnConfig::new();
	for (name, data_type) in &metadata.columns {
		let mut properties = BTreeMap::new();
		properties.insert(TYPE.to_string(), OptionValue::from(data_type.as_str()));
		if metadata.is_partition_key(name) {
			properties.insert(PARTITION_KEY.to_string(), OptionValue::Bool(true));
		}
		if metadata.is_clustering_key(name) {
			properties.insert(CLUSTERING_KEY.to_string(), OptionValue::Bool(true));
		}
		if metadata.has_secondary_index(name) {
			properties.insert(SECONDARY_INDEX.to_string(), OptionValue::Bool(true));
		}
		if metadata.is_encrypted(name) {
			properties.insert(ENCRYPTED.to_string(), OptionValue::Bool(true));
		}
		columns.insert(name.clone(), properties);
	}

	let mut options = OptionsConfig::new();
	if !metadata.clustering_orders.is_empty() {
		let orders = metadata
			.clustering_orders
			.iter()
			.map(|(column, order)| (column.clone(), OptionValue::from(order.as_str())))
			.collect();
		options.insert(CLUSTERING_ORDER.to_string(), OptionValue::Nested(orders));
	}

	(columns, options)
}

/// Checks structural integrity of pre-built metadata.
///
/// The partition key must be non-empty, and every column referenced by a
/// key sequence or membership set must be declared in `columns`.
pub fn validate_metadata(metadata: &TableMetadata) -> Result<()> {
	if metadata.partition_key_columns.is_empty() {
		return_error!(missing_partition_key());
	}
	for column in &metadata.partition_key_columns {
		if !metadata.columns.contains_key(column) {
			return_error!(unknown_column_reference(column, "partition key"));
		}
	}
	for column in &metadata.clustering_key_columns {
		if !metadata.columns.contains_key(column) {
			return_error!(unknown_column_reference(column, "clustering key"));
		}
	}
	for column in metadata.clustering_orders.keys() {
		if !metadata.columns.contains_key(column) {
			return_error!(unknown_column_reference(column, "clustering order"));
		}
	}
	for column in &metadata.secondary_index_columns {
		if !metadata.columns.contains_key(column) {
			return_error!(unknown_column_reference(column, "secondary index"));
		}
	}
	for column in &metadata.encrypted_columns {
		if !metadata.columns.contains_key(column) {
			return_error!(unknown_column_reference(column, "encrypted set"));
		}
	}
	Ok(())
}

fn flag(properties: &BTreeMap<String, OptionValue>, name: &str) -> bool {
	matches!(properties.get(name), Some(OptionValue::Bool(true)))
}

fn sort_order(column: &str, value: &OptionValue, mode: TranslateMode) -> Result<SortOrder> {
	let declared = match value.as_str() {
		Some(declared) => declared.to_string(),
		None => value.to_string(),
	};
	match SortOrder::from_str(&declared) {
		Ok(order) => Ok(order),
		Err(()) => match mode {
			TranslateMode::Lenient => Ok(SortOrder::Asc),
			TranslateMode::Strict => return_error!(unknown_sort_order(column, &declared)),
		},
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use quarry_type::{DataType, OptionValue, SortOrder};

	use crate::{
		metadata::TableMetadata,
		translate::{
			CLUSTERING_KEY, ColumnConfig, ENCRYPTED, OptionsConfig, PARTITION_KEY, SECONDARY_INDEX,
			TYPE, TranslateMode, from_metadata, to_metadata, validate_metadata,
		},
	};

	fn column(properties: &[(&str, OptionValue)]) -> BTreeMap<String, OptionValue> {
		properties.iter().map(|(name, value)| (name.to_string(), value.clone())).collect()
	}

	fn sample_columns() -> ColumnConfig {
		let mut columns = ColumnConfig::new();
		columns.insert(
			"id".to_string(),
			column(&[(TYPE, OptionValue::from("INT")), (PARTITION_KEY, OptionValue::Bool(true))]),
		);
		columns.insert(
			"ts".to_string(),
			column(&[
				(TYPE, OptionValue::from("TIMESTAMP")),
				(CLUSTERING_KEY, OptionValue::Bool(true)),
			]),
		);
		columns.insert(
			"payload".to_string(),
			column(&[(TYPE, OptionValue::from("BLOB")), (ENCRYPTED, OptionValue::Bool(true))]),
		);
		columns.insert(
			"tag".to_string(),
			column(&[(TYPE, OptionValue::from("TEXT")), (SECONDARY_INDEX, OptionValue::Bool(true))]),
		);
		columns
	}

	fn sample_options() -> OptionsConfig {
		let mut orders = BTreeMap::new();
		orders.insert("ts".to_string(), OptionValue::from("DESC"));
		let mut options = OptionsConfig::new();
		options.insert("clustering_order".to_string(), OptionValue::Nested(orders));
		options
	}

	#[test]
	fn test_to_metadata() {
		let metadata = to_metadata(&sample_columns(), &sample_options(), TranslateMode::Lenient).unwrap();

		assert_eq!(metadata.columns.len(), 4);
		assert_eq!(metadata.column_type("id"), Some(DataType::Int));
		assert_eq!(metadata.column_type("ts"), Some(DataType::Timestamp));
		assert_eq!(metadata.partition_key_columns, vec!["id".to_string()]);
		assert_eq!(metadata.clustering_key_columns, vec!["ts".to_string()]);
		assert_eq!(metadata.clustering_order("ts"), Some(SortOrder::Desc));
		assert!(metadata.has_secondary_index("tag"));
		assert!(metadata.is_encrypted("payload"));
	}

	#[test]
	fn test_round_trip() {
		let metadata = to_metadata(&sample_columns(), &sample_options(), TranslateMode::Lenient).unwrap();
		let (columns, options) = from_metadata(&metadata);
		let restored = to_metadata(&columns, &options, TranslateMode::Lenient).unwrap();
		assert_eq!(restored, metadata);
	}

	#[test]
	fn test_plain_column_gets_only_type() {
		let metadata = to_metadata(&sample_columns(), &sample_options(), TranslateMode::Lenient).unwrap();
		let (columns, _) = from_metadata(&metadata);

		// A column with no key or index role unfolds to its type alone
		let properties = &columns["payload"];
		assert_eq!(properties.get("type"), Some(&OptionValue::from("BLOB")));
		assert!(!properties.contains_key("partition_key"));
		assert!(!properties.contains_key("clustering_key"));
	}

	#[test]
	fn test_missing_type_property() {
		let mut columns = sample_columns();
		columns.insert("broken".to_string(), column(&[(PARTITION_KEY, OptionValue::Bool(true))]));

		let err = to_metadata(&columns, &OptionsConfig::new(), TranslateMode::Lenient).unwrap_err();
		assert_eq!(err.diagnostic().code, "SC_001");
	}

	#[test]
	fn test_non_string_type_property() {
		let mut columns = ColumnConfig::new();
		columns.insert(
			"id".to_string(),
			column(&[(TYPE, OptionValue::Int(42)), (PARTITION_KEY, OptionValue::Bool(true))]),
		);

		let err = to_metadata(&columns, &OptionsConfig::new(), TranslateMode::Lenient).unwrap_err();
		assert_eq!(err.diagnostic().code, "SC_001");
	}

	#[test]
	fn test_unknown_type_lenient_falls_back_to_text() {
		let mut columns = sample_columns();
		columns.insert(
			"ref".to_string(),
			column(&[(TYPE, OptionValue::from("UUID"))]),
		);

		let metadata = to_metadata(&columns, &sample_options(), TranslateMode::Lenient).unwrap();
		assert_eq!(metadata.column_type("ref"), Some(DataType::Text));
	}

	#[test]
	fn test_unknown_type_strict_is_rejected() {
		let mut columns = sample_columns();
		columns.insert(
			"ref".to_string(),
			column(&[(TYPE, OptionValue::from("UUID"))]),
		);

		let err = to_metadata(&columns, &sample_options(), TranslateMode::Strict).unwrap_err();
		assert_eq!(err.diagnostic().code, "SC_004");
	}

	#[test]
	fn test_unknown_sort_order_lenient_falls_back_to_asc() {
		let mut orders = BTreeMap::new();
		orders.insert("ts".to_string(), OptionValue::from("RANDOM"));
		let mut options = OptionsConfig::new();
		options.insert("clustering_order".to_string(), OptionValue::Nested(orders));

		let metadata = to_metadata(&sample_columns(), &options, TranslateMode::Lenient).unwrap();
		assert_eq!(metadata.clustering_order("ts"), Some(SortOrder::Asc));
	}

	#[test]
	fn test_unknown_sort_order_strict_is_rejected() {
		let mut orders = BTreeMap::new();
		orders.insert("ts".to_string(), OptionValue::from("RANDOM"));
		let mut options = OptionsConfig::new();
		options.insert("clustering_order".to_string(), OptionValue::Nested(orders));

		let err = to_metadata(&sample_columns(), &options, TranslateMode::Strict).unwrap_err();
		assert_eq!(err.diagnostic().code, "SC_005");
	}

	#[test]
	fn test_clustering_key_defaults_to_asc() {
		let metadata =
			to_metadata(&sample_columns(), &OptionsConfig::new(), TranslateMode::Lenient).unwrap();
		assert_eq!(metadata.clustering_order("ts"), Some(SortOrder::Asc));
	}

	#[test]
	fn test_order_for_non_clustering_column_is_ignored() {
		let mut orders = BTreeMap::new();
		orders.insert("ts".to_string(), OptionValue::from("DESC"));
		orders.insert("tag".to_string(), OptionValue::from("DESC"));
		let mut options = OptionsConfig::new();
		options.insert("clustering_order".to_string(), OptionValue::Nested(orders));

		let metadata = to_metadata(&sample_columns(), &options, TranslateMode::Lenient).unwrap();
		assert_eq!(metadata.clustering_order("tag"), None);
		assert_eq!(metadata.clustering_order("ts"), Some(SortOrder::Desc));
	}

	#[test]
	fn test_missing_partition_key() {
		let mut columns = ColumnConfig::new();
		columns.insert("id".to_string(), column(&[(TYPE, OptionValue::from("INT"))]));

		let err = to_metadata(&columns, &OptionsConfig::new(), TranslateMode::Lenient).unwrap_err();
		assert_eq!(err.diagnostic().code, "SC_002");
	}

	#[test]
	fn test_flag_must_be_boolean_true() {
		let mut columns = ColumnConfig::new();
		columns.insert(
			"id".to_string(),
			column(&[(TYPE, OptionValue::from("INT")), (PARTITION_KEY, OptionValue::from("true"))]),
		);

		// A string "true" is not a flag, so the partition key stays empty
		let err = to_metadata(&columns, &OptionsConfig::new(), TranslateMode::Lenient).unwrap_err();
		assert_eq!(err.diagnostic().code, "SC_002");
	}

	#[test]
	fn test_key_columns_collected_in_name_order() {
		let mut columns = ColumnConfig::new();
		for name in ["zone", "area", "mark"] {
			columns.insert(
				name.to_string(),
				column(&[
					(TYPE, OptionValue::from("TEXT")),
					(PARTITION_KEY, OptionValue::Bool(true)),
				]),
			);
		}

		let metadata = to_metadata(&columns, &OptionsConfig::new(), TranslateMode::Lenient).unwrap();
		assert_eq!(
			metadata.partition_key_columns,
			vec!["area".to_string(), "mark".to_string(), "zone".to_string()]
		);
	}

	#[test]
	fn test_validate_metadata_rejects_undeclared_reference() {
		let mut metadata = TableMetadata::default();
		metadata.columns.insert("id".to_string(), DataType::Int);
		metadata.partition_key_columns.push("id".to_string());
		metadata.secondary_index_columns.insert("ghost".to_string());

		let err = validate_metadata(&metadata).unwrap_err();
		assert_eq!(err.diagnostic().code, "SC_003");
	}

	#[test]
	fn test_validate_metadata_accepts_consistent_metadata() {
		let metadata = to_metadata(&sample_columns(), &sample_options(), TranslateMode::Lenient).unwrap();
		validate_metadata(&metadata).unwrap();
	}
}
