// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Scalar data types for table columns.

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

/// A scalar column data type.
///
/// Wire names are the uppercase variant names. Parsing via [`FromStr`] is
/// strict; the schema translator decides what to do with unknown names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
	/// A boolean: true or false
	Boolean,
	/// A 4-byte signed integer
	Int,
	/// An 8-byte signed integer
	BigInt,
	/// A 4-byte floating point
	Float,
	/// An 8-byte floating point
	Double,
	/// A UTF-8 encoded string
	Text,
	/// An opaque byte sequence
	Blob,
	/// A calendar date without time of day
	Date,
	/// A time of day without date
	Time,
	/// A date and time without timezone
	Timestamp,
	/// A date and time with timezone
	TimestampTz,
}

impl DataType {
	pub fn as_str(&self) -> &'static str {
		match self {
			DataType::Boolean => "BOOLEAN",
			DataType::Int => "INT",
			DataType::BigInt => "BIGINT",
			DataType::Float => "FLOAT",
			DataType::Double => "DOUBLE",
			DataType::Text => "TEXT",
			DataType::Blob => "BLOB",
			DataType::Date => "DATE",
			DataType::Time => "TIME",
			DataType::Timestamp => "TIMESTAMP",
			DataType::TimestampTz => "TIMESTAMPTZ",
		}
	}

	pub fn is_numeric(&self) -> bool {
		matches!(self, DataType::Int | DataType::BigInt | DataType::Float | DataType::Double)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, DataType::Date | DataType::Time | DataType::Timestamp | DataType::TimestampTz)
	}
}

impl Display for DataType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for DataType {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"BOOLEAN" => Ok(DataType::Boolean),
			"INT" => Ok(DataType::Int),
			"BIGINT" => Ok(DataType::BigInt),
			"FLOAT" => Ok(DataType::Float),
			"DOUBLE" => Ok(DataType::Double),
			"TEXT" => Ok(DataType::Text),
			"BLOB" => Ok(DataType::Blob),
			"DATE" => Ok(DataType::Date),
			"TIME" => Ok(DataType::Time),
			"TIMESTAMP" => Ok(DataType::Timestamp),
			"TIMESTAMPTZ" => Ok(DataType::TimestampTz),
			_ => Err(()),
		}
	}
}
