// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::{BTreeMap, BTreeSet};

use quarry_type::{DataType, SortOrder};
use serde::{Deserialize, Serialize};

/// Canonical description of a table schema.
///
/// Key column sequences keep their declared order. Membership sets and
/// per-column mappings use BTree collections, so iteration over them is
/// deterministic and name-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
	/// Every declared column, mapped to its scalar type.
	pub columns: BTreeMap<String, DataType>,
	/// Partition key columns. Non-empty for every valid table.
	pub partition_key_columns: Vec<String>,
	/// Clustering key columns. May be empty.
	pub clustering_key_columns: Vec<String>,
	/// Sort order per clustering key column.
	pub clustering_orders: BTreeMap<String, SortOrder>,
	/// Columns carrying a secondary index.
	pub secondary_index_columns: BTreeSet<String>,
	/// Columns encrypted at rest.
	pub encrypted_columns: BTreeSet<String>,
}

impl TableMetadata {
	pub fn column_type(&self, column: &str) -> Option<DataType> {
		self.columns.get(column).copied()
	}

	pub fn is_partition_key(&self, column: &str) -> bool {
		self.partition_key_columns.iter().any(|name| name == column)
	}

	pub fn is_clustering_key(&self, column: &str) -> bool {
		self.clustering_key_columns.iter().any(|name| name == column)
	}

	pub fn has_secondary_index(&self, column: &str) -> bool {
		self.secondary_index_columns.contains(column)
	}

	pub fn is_encrypted(&self, column: &str) -> bool {
		self.encrypted_columns.contains(column)
	}

	pub fn clustering_order(&self, column: &str) -> Option<SortOrder> {
		self.clustering_orders.get(column).copied()
	}
}
