// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Async administrative client.

use std::{collections::HashMap, sync::Arc};

use futures_util::{
	SinkExt, StreamExt,
	stream::{SplitSink, SplitStream},
};
use quarry_catalog::{
	ColumnConfig, OptionsConfig, TableMetadata, TranslateMode, options,
	translate::{from_metadata, to_metadata, validate_metadata},
};
use quarry_network::{
	DEFAULT_HOP_LIMIT, Request, RequestHeader, RequestPayload, Response, ResponsePayload,
	protocol::{
		CreateNamespaceRequest, CreateTableRequest, DropNamespaceRequest, DropTableRequest,
		GetTableMetadataRequest, ListNamespacesRequest, ListTablesRequest, NamespaceExistsRequest,
		TableExistsRequest,
	},
};
use quarry_type::{
	Error, Result,
	diagnostic::network::{connect_failed, connection_closed, unexpected_response},
	error, return_error,
};
use tokio::{
	net::TcpStream,
	sync::{Mutex, mpsc, oneshot},
};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

use crate::{config::ClientConfig, utils::generate_request_id};

type WsWrite = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;
type WsRead = SplitStream<WebSocketStream<MaybeTlsStream<TcpStream>>>;
type PendingRequests = Arc<Mutex<HashMap<String, oneshot::Sender<Response>>>>;

/// Async administrative client for Quarry.
///
/// The connection is established lazily on the first operation. When a
/// request fails because the connection broke, the connection is
/// discarded and the next operation connects again; no operation is
/// retried implicitly.
pub struct AdminClient {
	config: ClientConfig,
	connection: Option<Connection>,
}

struct Connection {
	request_tx: mpsc::Sender<(Request, oneshot::Sender<Response>)>,
	shutdown_tx: mpsc::Sender<()>,
}

impl AdminClient {
	/// Create a client. No connection is made until the first call.
	pub fn new(config: ClientConfig) -> Self {
		Self {
			config,
			connection: None,
		}
	}

	/// Create a namespace, succeeding even when it already exists.
	pub async fn create_namespace(&mut self, name: &str, options: &OptionsConfig) -> Result<()> {
		let response = self
			.send_request(RequestPayload::CreateNamespace(CreateNamespaceRequest {
				name: name.to_string(),
				options: options::encode(options),
				if_not_exists: true,
			}))
			.await?;
		expect_ok(response)
	}

	/// Drop a namespace and every table under it, succeeding even when
	/// the namespace does not exist.
	pub async fn drop_namespace(&mut self, name: &str) -> Result<()> {
		let response = self
			.send_request(RequestPayload::DropNamespace(DropNamespaceRequest {
				name: name.to_string(),
				if_exists: true,
			}))
			.await?;
		expect_ok(response)
	}

	pub async fn namespace_exists(&mut self, name: &str) -> Result<bool> {
		let response = self
			.send_request(RequestPayload::NamespaceExists(NamespaceExistsRequest {
				name: name.to_string(),
			}))
			.await?;
		expect_exists(response)
	}

	/// Create a table from a column/options configuration.
	///
	/// The configuration is translated to canonical metadata locally,
	/// with lenient handling of unknown type and sort order names, and
	/// rejected before any request is sent when it is structurally
	/// invalid. Succeeds when the table already exists.
	pub async fn create_table(
		&mut self,
		namespace: &str,
		table: &str,
		columns: &ColumnConfig,
		options: &OptionsConfig,
	) -> Result<()> {
		let metadata = to_metadata(columns, options, TranslateMode::Lenient)?;
		self.create_table_request(namespace, table, metadata, options).await
	}

	/// Create a table from pre-built metadata.
	pub async fn create_table_with_metadata(
		&mut self,
		namespace: &str,
		table: &str,
		metadata: TableMetadata,
		options: &OptionsConfig,
	) -> Result<()> {
		validate_metadata(&metadata)?;
		self.create_table_request(namespace, table, metadata, options).await
	}

	/// Drop a table, succeeding even when the table does not exist.
	pub async fn drop_table(&mut self, namespace: &str, table: &str) -> Result<()> {
		let response = self
			.send_request(RequestPayload::DropTable(DropTableRequest {
				namespace: namespace.to_string(),
				table: table.to_string(),
				if_exists: true,
			}))
			.await?;
		expect_ok(response)
	}

	pub async fn table_exists(&mut self, namespace: &str, table: &str) -> Result<bool> {
		let response = self
			.send_request(RequestPayload::TableExists(TableExistsRequest {
				namespace: namespace.to_string(),
				table: table.to_string(),
			}))
			.await?;
		expect_exists(response)
	}

	/// Fetch a table definition in configuration shape.
	///
	/// The canonical unfolding of the stored metadata wins; stored
	/// options fill in whatever it did not produce, so opaque settings
	/// survive the round trip.
	pub async fn get_table_schema(
		&mut self,
		namespace: &str,
		table: &str,
	) -> Result<(ColumnConfig, OptionsConfig)> {
		let response = self
			.send_request(RequestPayload::GetTableMetadata(GetTableMetadataRequest {
				namespace: namespace.to_string(),
				table: table.to_string(),
			}))
			.await?;
		let found = expect_metadata(response)?;

		let (columns, mut options) = from_metadata(&found.metadata);
		for (name, value) in options::decode(&found.options) {
			options.entry(name).or_insert(value);
		}
		Ok((columns, options))
	}

	pub async fn list_namespaces(&mut self) -> Result<Vec<String>> {
		let response = self.send_request(RequestPayload::ListNamespaces(ListNamespacesRequest {})).await?;
		expect_names(response)
	}

	pub async fn list_tables(&mut self, namespace: &str) -> Result<Vec<String>> {
		let response = self
			.send_request(RequestPayload::ListTables(ListTablesRequest {
				namespace: namespace.to_string(),
			}))
			.await?;
		expect_names(response)
	}

	/// Close the connection gracefully.
	pub async fn close(mut self) -> Result<()> {
		if let Some(connection) = self.connection.take() {
			let _ = connection.shutdown_tx.send(()).await;
		}
		Ok(())
	}

	async fn create_table_request(
		&mut self,
		namespace: &str,
		table: &str,
		metadata: TableMetadata,
		options: &OptionsConfig,
	) -> Result<()> {
		let response = self
			.send_request(RequestPayload::CreateTable(CreateTableRequest {
				namespace: namespace.to_string(),
				table: table.to_string(),
				metadata,
				options: options::encode(options),
				if_not_exists: true,
			}))
			.await?;
		expect_ok(response)
	}

	/// Send a request and wait for the response.
	async fn send_request(&mut self, payload: RequestPayload) -> Result<Response> {
		self.ensure_connected().await?;

		let request = Request {
			id: generate_request_id(),
			header: RequestHeader {
				hop_limit: DEFAULT_HOP_LIMIT,
				auth_token: self.config.auth_token(),
			},
			payload,
		};

		let (tx, rx) = oneshot::channel();
		let Some(connection) = &self.connection else {
			return_error!(connection_closed());
		};
		if connection.request_tx.send((request, tx)).await.is_err() {
			self.connection = None;
			return_error!(connection_closed());
		}
		match rx.await {
			Ok(response) => Ok(response),
			Err(_) => {
				self.connection = None;
				return_error!(connection_closed());
			}
		}
	}

	async fn ensure_connected(&mut self) -> Result<()> {
		if self.connection.is_some() {
			return Ok(());
		}

		let url = self.config.url();
		let (ws_stream, _) = connect_async(&url).await.map_err(|e| error!(connect_failed(&url, e)))?;
		let (write, read) = ws_stream.split();

		// Channel for sending requests
		let (request_tx, request_rx) = mpsc::channel::<(Request, oneshot::Sender<Response>)>(32);

		// Channel for shutdown signal
		let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);

		// Pending requests map
		let pending: PendingRequests = Arc::new(Mutex::new(HashMap::new()));

		tokio::spawn(async move {
			connection_loop(write, read, request_rx, shutdown_rx, pending).await;
		});

		self.connection = Some(Connection {
			request_tx,
			shutdown_tx,
		});
		Ok(())
	}
}

impl Drop for AdminClient {
	fn drop(&mut self) {
		if let Some(connection) = self.connection.take() {
			// Best effort shutdown - ignore errors since we're dropping
			let _ = connection.shutdown_tx.try_send(());
		}
	}
}

/// Connection management loop
async fn connection_loop(
	mut write: WsWrite,
	mut read: WsRead,
	mut request_rx: mpsc::Receiver<(Request, oneshot::Sender<Response>)>,
	mut shutdown_rx: mpsc::Receiver<()>,
	pending: PendingRequests,
) {
	loop {
		tokio::select! {
			// Handle incoming messages
			Some(message) = read.next() => {
				match message {
					Ok(Message::Text(text)) => {
						if let Ok(response) = serde_json::from_str::<Response>(&text) {
							let mut pending_guard = pending.lock().await;
							if let Some(tx) = pending_guard.remove(&response.id) {
								let _ = tx.send(response);
							}
						}
					}
					Ok(Message::Ping(data)) => {
						let _ = write.send(Message::Pong(data)).await;
					}
					Ok(Message::Close(_)) => {
						break;
					}
					Err(_) => {
						break;
					}
					_ => {}
				}
			}

			// Handle outgoing requests
			Some((request, response_tx)) = request_rx.recv() => {
				let id = request.id.clone();

				// Register pending request
				{
					let mut pending_guard = pending.lock().await;
					pending_guard.insert(id, response_tx);
				}

				// Send the request
				if let Ok(json) = serde_json::to_string(&request) {
					if write.send(Message::Text(json.into())).await.is_err() {
						break;
					}
				}
			}

			// Handle shutdown signal
			_ = shutdown_rx.recv() => {
				let _ = write.send(Message::Close(None)).await;
				break;
			}
		}
	}

	// Clean up pending requests on disconnect
	let mut pending_guard = pending.lock().await;
	pending_guard.clear();
}

fn expect_ok(response: Response) -> Result<()> {
	match response.payload {
		ResponsePayload::Ok(_) => Ok(()),
		ResponsePayload::Err(err) => Err(Error(err.diagnostic)),
		_ => Err(error!(unexpected_response("ok"))),
	}
}

fn expect_exists(response: Response) -> Result<bool> {
	match response.payload {
		ResponsePayload::Exists(exists) => Ok(exists.exists),
		ResponsePayload::Err(err) => Err(Error(err.diagnostic)),
		_ => Err(error!(unexpected_response("exists"))),
	}
}

fn expect_metadata(response: Response) -> Result<quarry_network::response::MetadataResponse> {
	match response.payload {
		ResponsePayload::Metadata(metadata) => Ok(metadata),
		ResponsePayload::Err(err) => Err(Error(err.diagnostic)),
		_ => Err(error!(unexpected_response("metadata"))),
	}
}

fn expect_names(response: Response) -> Result<Vec<String>> {
	match response.payload {
		ResponsePayload::Names(names) => Ok(names.names),
		ResponsePayload::Err(err) => Err(Error(err.diagnostic)),
		_ => Err(error!(unexpected_response("names"))),
	}
}
