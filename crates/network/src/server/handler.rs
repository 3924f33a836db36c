// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Per-connection protocol handling.
//!
//! Each accepted socket is upgraded to a WebSocket and served by one
//! task: text frames carry requests, pings are answered with pongs, and
//! a close frame or the shutdown signal ends the task.

use futures_util::{SinkExt, StreamExt};
use quarry_type::diagnostic::{
	auth::invalid_token,
	network::{hop_limit_exhausted, malformed_request},
};
use tokio::{net::TcpStream, sync::watch};
use tokio_tungstenite::{accept_async, tungstenite::Message};

use crate::{
	protocol::{Request, RequestPayload},
	response::Response,
	server::ServerState,
};

/// Serves one client connection until close or shutdown.
pub(crate) async fn handle_connection(stream: TcpStream, state: ServerState, mut shutdown_rx: watch::Receiver<bool>) {
	let ws_stream = match accept_async(stream).await {
		Ok(ws_stream) => ws_stream,
		Err(e) => {
			tracing::debug!("WebSocket handshake failed: {}", e);
			return;
		}
	};
	let (mut write, mut read) = ws_stream.split();

	loop {
		tokio::select! {
			biased;

			result = shutdown_rx.changed() => {
				if result.is_err() || *shutdown_rx.borrow() {
					let _ = write.send(Message::Close(None)).await;
					break;
				}
			}

			message = read.next() => {
				match message {
					Some(Ok(Message::Text(text))) => {
						let response = process_text(&text, &state);
						let encoded = match serde_json::to_string(&response) {
							Ok(encoded) => encoded,
							Err(e) => {
								tracing::warn!("Failed to encode response: {}", e);
								continue;
							}
						};
						if write.send(Message::Text(encoded.into())).await.is_err() {
							break;
						}
					}
					Some(Ok(Message::Ping(payload))) => {
						if write.send(Message::Pong(payload)).await.is_err() {
							break;
						}
					}
					Some(Ok(Message::Close(_))) | None => break,
					Some(Ok(_)) => {}
					Some(Err(e)) => {
						tracing::debug!("Connection error: {}", e);
						break;
					}
				}
			}
		}
	}
}

/// Parses one text frame and runs it against the store.
///
/// Frames that do not parse as a request are answered with an error
/// response carrying an empty correlation id.
fn process_text(text: &str, state: &ServerState) -> Response {
	let request: Request = match serde_json::from_str(text) {
		Ok(request) => request,
		Err(e) => return Response::error("", malformed_request(e)),
	};
	dispatch(request, state)
}

fn dispatch(request: Request, state: &ServerState) -> Response {
	let Request {
		id,
		header,
		payload,
	} = request;

	// Gates run before any store access
	if header.hop_limit == 0 {
		return Response::error(id, hop_limit_exhausted());
	}
	if let Some(expected) = &state.auth_token {
		if header.auth_token.as_deref() != Some(expected.as_str()) {
			return Response::error(id, invalid_token());
		}
	}

	match payload {
		RequestPayload::CreateNamespace(req) => {
			match state.store.create_namespace(&req.name, req.options, req.if_not_exists) {
				Ok(()) => Response::ok(id),
				Err(e) => Response::error(id, e.diagnostic()),
			}
		}
		RequestPayload::DropNamespace(req) => match state.store.drop_namespace(&req.name, req.if_exists) {
			Ok(()) => Response::ok(id),
			Err(e) => Response::error(id, e.diagnostic()),
		},
		RequestPayload::NamespaceExists(req) => {
			Response::exists(id, state.store.namespace_exists(&req.name))
		}
		RequestPayload::CreateTable(req) => {
			match state.store.create_table(
				&req.namespace,
				&req.table,
				req.metadata,
				req.options,
				req.if_not_exists,
			) {
				Ok(()) => Response::ok(id),
				Err(e) => Response::error(id, e.diagnostic()),
			}
		}
		RequestPayload::DropTable(req) => {
			match state.store.drop_table(&req.namespace, &req.table, req.if_exists) {
				Ok(()) => Response::ok(id),
				Err(e) => Response::error(id, e.diagnostic()),
			}
		}
		RequestPayload::TableExists(req) => {
			Response::exists(id, state.store.table_exists(&req.namespace, &req.table))
		}
		RequestPayload::GetTableMetadata(req) => {
			match state.store.get_table_metadata(&req.namespace, &req.table) {
				Ok((metadata, options)) => Response::metadata(id, metadata, options),
				Err(e) => Response::error(id, e.diagnostic()),
			}
		}
		RequestPayload::ListNamespaces(_) => Response::names(id, state.store.list_namespaces()),
		RequestPayload::ListTables(req) => match state.store.list_tables(&req.namespace) {
			Ok(names) => Response::names(id, names),
			Err(e) => Response::error(id, e.diagnostic()),
		},
	}
}
