// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

use std::collections::BTreeMap;

use quarry_type::{
	Result,
	diagnostic::catalog::{namespace_already_exists, namespace_not_found},
	return_error,
};

use crate::store::{CatalogStore, NamespaceEntry};

impl CatalogStore {
	/// Creates a namespace.
	///
	/// With `if_not_exists` set, creating an existing namespace is a
	/// no-op success that leaves the namespace and its tables untouched.
	pub fn create_namespace(
		&self,
		name: &str,
		options: BTreeMap<String, String>,
		if_not_exists: bool,
	) -> Result<()> {
		let mut inner = self.inner.lock();
		if inner.namespaces.contains_key(name) {
			if if_not_exists {
				return Ok(());
			}
			return_error!(namespace_already_exists(name));
		}
		inner.namespaces.insert(
			name.to_string(),
			NamespaceEntry {
				options,
				tables: BTreeMap::new(),
			},
		);
		Ok(())
	}

	/// Drops a namespace and every table under it.
	pub fn drop_namespace(&self, name: &str, if_exists: bool) -> Result<()> {
		let mut inner = self.inner.lock();
		// Removing the entry drops all nested tables in the same step
		if inner.namespaces.remove(name).is_none() && !if_exists {
			return_error!(namespace_not_found(name));
		}
		Ok(())
	}

	pub fn namespace_exists(&self, name: &str) -> bool {
		self.inner.lock().namespaces.contains_key(name)
	}

	pub fn namespace_options(&self, name: &str) -> Result<BTreeMap<String, String>> {
		let inner = self.inner.lock();
		match inner.namespaces.get(name) {
			Some(entry) => Ok(entry.options.clone()),
			None => return_error!(namespace_not_found(name)),
		}
	}

	/// Lists namespace names in sorted order.
	pub fn list_namespaces(&self) -> Vec<String> {
		self.inner.lock().namespaces.keys().cloned().collect()
	}
}
