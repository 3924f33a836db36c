// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Ordering of a clustering-key column within a partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
	/// Ascending order
	#[default]
	Asc,
	/// Descending order
	Desc,
}

impl SortOrder {
	pub fn as_str(&self) -> &'static str {
		match self {
			SortOrder::Asc => "ASC",
			SortOrder::Desc => "DESC",
		}
	}
}

impl Display for SortOrder {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortOrder {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ASC" => Ok(SortOrder::Asc),
			"DESC" => Ok(SortOrder::Desc),
			_ => Err(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::str::FromStr;

	use super::*;

	#[test]
	fn test_parse() {
		assert_eq!(SortOrder::from_str("ASC"), Ok(SortOrder::Asc));
		assert_eq!(SortOrder::from_str("DESC"), Ok(SortOrder::Desc));
		assert_eq!(SortOrder::from_str("RANDOM"), Err(()));
	}

	#[test]
	fn test_default_is_ascending() {
		assert_eq!(SortOrder::default(), SortOrder::Asc);
	}
}
