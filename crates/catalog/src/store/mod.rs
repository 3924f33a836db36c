// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! In-memory authoritative store of namespaces and tables.
//!
//! Every operation is a check-then-act over shared state. A single lock
//! around the whole catalog keeps each operation atomic, so two racing
//! creates of the same name resolve to exactly one entry.

mod namespace;
mod table;

use std::collections::BTreeMap;

use parking_lot::Mutex;

use crate::metadata::TableMetadata;

/// The authoritative namespace and table store.
pub struct CatalogStore {
	inner: Mutex<CatalogInner>,
}

#[derive(Default)]
struct CatalogInner {
	namespaces: BTreeMap<String, NamespaceEntry>,
}

#[derive(Default)]
struct NamespaceEntry {
	options: BTreeMap<String, String>,
	tables: BTreeMap<String, TableEntry>,
}

struct TableEntry {
	metadata: TableMetadata,
	options: BTreeMap<String, String>,
}

impl CatalogStore {
	pub fn new() -> Self {
		Self {
			inner: Mutex::new(CatalogInner::default()),
		}
	}
}

impl Default for CatalogStore {
	fn default() -> Self {
		Self::new()
	}
}
