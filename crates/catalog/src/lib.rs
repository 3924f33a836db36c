// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Schema metadata for Quarry.
//!
//! The crate owns three concerns: the canonical [`TableMetadata`]
//! description of a table, the translation layer between loose
//! column/option configuration and that canonical form, and the
//! authoritative in-memory [`CatalogStore`] of namespaces and tables.

pub mod metadata;
pub mod options;
pub mod store;
pub mod translate;

pub use metadata::TableMetadata;
pub use store::CatalogStore;
pub use translate::{ColumnConfig, OptionsConfig, TranslateMode};
