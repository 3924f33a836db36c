// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

mod data_type;
mod option_value;
mod sort_order;

pub use data_type::DataType;
pub use option_value::OptionValue;
pub use sort_order::SortOrder;
