// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Core value and error types shared across Quarry crates.
//!
//! This crate is dependency-light on purpose: everything above it (catalog,
//! network, client) speaks in terms of these types.

pub mod error;
pub mod value;

pub use error::{Error, diagnostic, diagnostic::Diagnostic};
pub use value::{DataType, OptionValue, SortOrder};

pub type Result<T> = std::result::Result<T, Error>;
