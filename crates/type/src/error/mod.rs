// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;

use diagnostic::Diagnostic;

/// The unified error type: a newtype over [`Diagnostic`].
///
/// Every failure in the system carries a stable diagnostic code, so errors
/// survive a trip over the wire and callers can branch on kind without
/// matching message text.
#[derive(Debug, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.0.code, self.0.message)
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	/// A state-precondition violation: the target already exists.
	pub fn is_already_exists(&self) -> bool {
		matches!(self.0.code.as_str(), "CA_001" | "CA_003")
	}

	/// A state-precondition violation: the target does not exist.
	pub fn is_not_found(&self) -> bool {
		matches!(self.0.code.as_str(), "CA_002" | "CA_004")
	}

	/// A malformed schema description, not retryable without new input.
	pub fn is_validation(&self) -> bool {
		self.0.code.starts_with("SC_")
	}

	/// A transport failure, recoverable by retrying the operation.
	pub fn is_connection(&self) -> bool {
		matches!(self.0.code.as_str(), "NET_001" | "NET_002" | "NET_004")
	}
}

impl std::error::Error for Error {}

/// Wraps a [`Diagnostic`] into an [`Error`].
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::Error($diagnostic)
	};
}

/// Returns early with an [`Error`] built from the given diagnostic.
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}
