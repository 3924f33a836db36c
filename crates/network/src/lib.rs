// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Administrative wire protocol and server for Quarry.
//!
//! [`protocol`] and [`response`] define the JSON message types spoken
//! over WebSocket; [`server`] hosts them behind a [`CatalogStore`].
//!
//! [`CatalogStore`]: quarry_catalog::CatalogStore

pub mod protocol;
pub mod response;
pub mod server;

pub use protocol::{DEFAULT_HOP_LIMIT, Request, RequestHeader, RequestPayload};
pub use response::{Response, ResponsePayload};
pub use server::{AdminSubsystem, ServerConfig};
