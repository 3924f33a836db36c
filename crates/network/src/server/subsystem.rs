// Copyright (c) quarry.dev 2025
// This file is licensed under the MIT, see license.md file

//! Administrative server lifecycle.
//!
//! `AdminSubsystem` owns the listener task: startup, connection
//! tracking, connection limiting and graceful shutdown with draining.

use std::{
	net::SocketAddr,
	sync::{
		Arc, RwLock,
		atomic::{AtomicBool, AtomicUsize, Ordering},
	},
	time::Duration,
};

use quarry_catalog::CatalogStore;
use quarry_type::{
	Result,
	diagnostic::network::{address_unavailable, bind_failed},
	error,
};
use tokio::{
	net::TcpListener,
	spawn,
	sync::{Semaphore, watch},
	time::{Instant, sleep},
};

use crate::server::{ServerConfig, ServerState, handler::handle_connection};

/// WebSocket server for the administrative protocol.
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(CatalogStore::new());
/// let mut server = AdminSubsystem::new(ServerConfig::new(), store);
///
/// server.start().await?;
/// // Server is now accepting connections
///
/// server.shutdown().await?;
/// // Server has gracefully stopped, connections drained
/// ```
pub struct AdminSubsystem {
	config: ServerConfig,
	store: Arc<CatalogStore>,
	/// Actual bound address (available after start).
	actual_addr: RwLock<Option<SocketAddr>>,
	/// Flag indicating if the server is running.
	running: Arc<AtomicBool>,
	/// Count of active connections.
	active_connections: Arc<AtomicUsize>,
	/// Channel to send shutdown signal.
	shutdown_tx: Option<watch::Sender<bool>>,
	/// Semaphore for connection limiting.
	connection_semaphore: Arc<Semaphore>,
}

impl AdminSubsystem {
	pub fn new(config: ServerConfig, store: Arc<CatalogStore>) -> Self {
		let max_connections = config.max_connections();
		Self {
			config,
			store,
			actual_addr: RwLock::new(None),
			running: Arc::new(AtomicBool::new(false)),
			active_connections: Arc::new(AtomicUsize::new(0)),
			shutdown_tx: None,
			connection_semaphore: Arc::new(Semaphore::new(max_connections)),
		}
	}

	/// Get the actual bound address (available after start).
	pub fn local_addr(&self) -> Option<SocketAddr> {
		*self.actual_addr.read().unwrap()
	}

	/// Get the actual bound port (available after start).
	pub fn port(&self) -> Option<u16> {
		self.local_addr().map(|addr| addr.port())
	}

	/// Get the current number of active connections.
	pub fn active_connections(&self) -> usize {
		self.active_connections.load(Ordering::SeqCst)
	}

	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::SeqCst)
	}

	/// Binds the listener and spawns the accept loop.
	pub async fn start(&mut self) -> Result<()> {
		// Idempotent: if already running, return success
		if self.running.load(Ordering::SeqCst) {
			return Ok(());
		}

		let addr = self.config.bind_addr().to_string();
		let listener = TcpListener::bind(&addr).await.map_err(|e| error!(bind_failed(&addr, e)))?;

		let actual_addr = listener.local_addr().map_err(|e| error!(address_unavailable(e)))?;
		*self.actual_addr.write().unwrap() = Some(actual_addr);
		tracing::info!("Administrative server bound to {}", actual_addr);

		let (tx, mut rx) = watch::channel(false);
		let state = ServerState {
			store: self.store.clone(),
			auth_token: self.config.auth_token(),
		};
		let running = self.running.clone();
		let active_connections = self.active_connections.clone();
		let semaphore = self.connection_semaphore.clone();

		spawn(async move {
			running.store(true, Ordering::SeqCst);

			loop {
				tokio::select! {
					biased;

					// Check shutdown first
					result = rx.changed() => {
						if result.is_err() || *rx.borrow() {
							tracing::info!("Administrative server shutting down");
							break;
						}
					}

					// Accept new connections
					accept = listener.accept() => {
						match accept {
							Ok((stream, peer)) => {
								// Try to acquire a permit (non-blocking)
								let permit = match semaphore.clone().try_acquire_owned() {
									Ok(permit) => permit,
									Err(_) => {
										tracing::warn!("Connection limit reached, rejecting {}", peer);
										continue;
									}
								};

								let conn_state = state.clone();
								let shutdown_rx = rx.clone();
								let active = active_connections.clone();

								active.fetch_add(1, Ordering::SeqCst);
								tracing::debug!("Accepted connection from {}", peer);

								spawn(async move {
									handle_connection(stream, conn_state, shutdown_rx).await;
									active.fetch_sub(1, Ordering::SeqCst);
									drop(permit);
								});
							}
							Err(e) => {
								tracing::warn!("Accept error: {}", e);
							}
						}
					}
				}
			}

			running.store(false, Ordering::SeqCst);
			tracing::info!("Administrative server stopped");
		});

		self.shutdown_tx = Some(tx);
		Ok(())
	}

	/// Signals shutdown and waits for active connections to drain.
	pub async fn shutdown(&mut self) -> Result<()> {
		if let Some(tx) = self.shutdown_tx.take() {
			let _ = tx.send(true);
		}

		// Wait for active connections to drain (with timeout)
		let active = self.active_connections.clone();

		let deadline = Instant::now() + Duration::from_secs(30);
		while active.load(Ordering::SeqCst) > 0 {
			if Instant::now() > deadline {
				tracing::warn!(
					"Shutdown timeout with {} connections still active",
					active.load(Ordering::SeqCst)
				);
				break;
			}
			sleep(Duration::from_millis(100)).await;
		}
		tracing::debug!("Administrative server shutdown completed");

		Ok(())
	}
}
