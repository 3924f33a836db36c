// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeMap;

use quarry_type::{
	Result,
	diagnostic::catalog::{namespace_not_found, table_already_exists, table_not_found},
	return_error,
};

use crate::{
	metadata::TableMetadata,
	store::{CatalogStore, TableEntry},
};

impl CatalogStore {
	/// Creates a table under an existing namespace.
	///
	/// Metadata and options are stored verbatim. With `if_not_exists`
	/// set, creating an existing table is a no-op success that leaves
	/// the stored definition untouched.
	pub fn create_table(
		&self,
		namespace: &str,
		table: &str,
		metadata: TableMetadata,
		options: BTreeMap<String, String>,
		if_not_exists: bool,
	) -> Result<()> {
		let mut inner = self.inner.lock();
		let Some(entry) = inner.namespaces.get_mut(namespace) else {
			return_error!(namespace_not_found(namespace));
		};
		if entry.tables.contains_key(table) {
			if if_not_exists {
				return Ok(());
			}
			return_error!(table_already_exists(namespace, table));
		}
		entry.tables.insert(
			table.to_string(),
			TableEntry {
				metadata,
				options,
			},
		);
		Ok(())
	}

	/// Drops a table.
	///
	/// `if_exists` forgives a missing table, never a missing namespace.
	pub fn drop_table(&self, namespace: &str, table: &str, if_exists: bool) -> Result<()> {
		let mut inner = self.inner.lock();
		let Some(entry) = inner.namespaces.get_mut(namespace) else {
			return_error!(namespace_not_found(namespace));
		};
		if entry.tables.remove(table).is_none() && !if_exists {
			return_error!(table_not_found(namespace, table));
		}
		Ok(())
	}

	pub fn table_exists(&self, namespace: &str, table: &str) -> bool {
		let inner = self.inner.lock();
		inner.namespaces.get(namespace).is_some_and(|entry| entry.tables.contains_key(table))
	}

	/// Returns the stored metadata and options of a table.
	pub fn get_table_metadata(
		&self,
		namespace: &str,
		table: &str,
	) -> Result<(TableMetadata, BTreeMap<String, String>)> {
		let inner = self.inner.lock();
		let Some(entry) = inner.namespaces.get(namespace) else {
			return_error!(namespace_not_found(namespace));
		};
		match entry.tables.get(table) {
			Some(found) => Ok((found.metadata.clone(), found.options.clone())),
			None => return_error!(table_not_found(namespace, table)),
		}
	}

	/// Lists table names of a namespace in sorted order.
	pub fn list_tables(&self, namespace: &str) -> Result<Vec<String>> {
		let inner = self.inner.lock();
		match inner.namespaces.get(namespace) {
			Some(entry) => Ok(entry.tables.keys().cloned().collect()),
			None => return_error!(namespace_not_found(namespace)),
		}
	}
}
