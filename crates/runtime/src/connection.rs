//! JSON-RPC connection over a DevTools WebSocket.
//!
//! Handles request/response correlation on top of the socket:
//! - Generating sequential request IDs
//! - Correlating responses with pending requests through oneshot channels
//! - Dropping events, which the watcher never subscribes to
//!
//! A background task owns the read half of the socket. When the socket closes,
//! every pending request resolves to [`Error::ConnectionClosed`] and no new
//! request is accepted. A request with no reply within the request timeout
//! fails with [`Error::Timeout`].

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use nexus_protocol::{Message as ProtocolMessage, Request};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::net::TcpStream;
use tokio::sync::{Mutex as AsyncMutex, oneshot};
use tokio::task::JoinHandle;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;
/// Pending requests by id; `None` once the dispatch loop has ended.
type Callbacks = Arc<Mutex<Option<HashMap<u32, oneshot::Sender<Result<Value>>>>>>;

/// Upper bound on the wait for any single reply.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Live DevTools session bound to one WebSocket URL.
pub struct Connection {
	last_id: AtomicU32,
	callbacks: Callbacks,
	sink: AsyncMutex<SplitSink<Socket, Message>>,
	reader: JoinHandle<()>,
	request_timeout: Duration,
}

impl Connection {
	/// Opens the socket and spawns the dispatch loop.
	pub async fn connect(ws_url: &str) -> Result<Self> {
		let (socket, _) = tokio_tungstenite::connect_async(ws_url).await?;
		debug!(target: "nexus.cdp", url = %ws_url, "connected");

		let (sink, stream) = socket.split();
		let callbacks: Callbacks = Arc::new(Mutex::new(Some(HashMap::new())));
		let reader = tokio::spawn(run_dispatch(stream, Arc::clone(&callbacks)));

		Ok(Self {
			last_id: AtomicU32::new(0),
			callbacks,
			sink: AsyncMutex::new(sink),
			reader,
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
		})
	}

	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	/// Sends `method` and awaits its correlated response.
	pub async fn send(&self, method: &str, params: Value) -> Result<Value> {
		let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
		let (tx, rx) = oneshot::channel();
		match self.callbacks.lock().as_mut() {
			Some(pending) => pending.insert(id, tx),
			None => return Err(Error::ConnectionClosed),
		};

		let request = Request {
			id,
			method: method.to_string(),
			params,
		};
		let text = serde_json::to_string(&request)?;
		trace!(target: "nexus.cdp", id, %method, "send");

		if let Err(err) = self.sink.lock().await.send(Message::Text(text.into())).await {
			self.forget(id);
			return Err(err.into());
		}

		match tokio::time::timeout(self.request_timeout, rx).await {
			Ok(reply) => reply.map_err(|_| Error::ConnectionClosed).and_then(|result| result),
			Err(_) => {
				self.forget(id);
				warn!(target: "nexus.cdp", id, %method, timeout = ?self.request_timeout, "no reply");
				Err(Error::Timeout {
					method: method.to_string(),
					after: self.request_timeout,
				})
			}
		}
	}

	fn forget(&self, id: u32) {
		if let Some(pending) = self.callbacks.lock().as_mut() {
			pending.remove(&id);
		}
	}

	/// Whether the dispatch loop is still reading.
	pub fn is_open(&self) -> bool {
		!self.reader.is_finished()
	}

	/// Sends a close frame; pending requests fail with `ConnectionClosed`.
	pub async fn close(&self) -> Result<()> {
		let mut sink = self.sink.lock().await;
		match sink.close().await {
			Ok(()) | Err(tokio_tungstenite::tungstenite::Error::ConnectionClosed) => Ok(()),
			Err(err) => Err(err.into()),
		}
	}
}

impl Drop for Connection {
	fn drop(&mut self) {
		self.reader.abort();
	}
}

async fn run_dispatch(mut stream: SplitStream<Socket>, callbacks: Callbacks) {
	while let Some(frame) = stream.next().await {
		let text = match frame {
			Ok(Message::Text(text)) => text,
			Ok(Message::Close(_)) => break,
			Ok(_) => continue,
			Err(err) => {
				warn!(target: "nexus.cdp", error = %err, "socket read failed");
				break;
			}
		};

		match serde_json::from_str::<ProtocolMessage>(&text) {
			Ok(ProtocolMessage::Response(response)) => {
				let Some(tx) = callbacks.lock().as_mut().and_then(|pending| pending.remove(&response.id)) else {
					warn!(target: "nexus.cdp", id = response.id, "response for unknown request");
					continue;
				};
				let result = match response.error {
					Some(err) => Err(Error::Protocol {
						code: err.code,
						message: err.message,
					}),
					None => Ok(response.result.unwrap_or(Value::Null)),
				};
				let _ = tx.send(result);
			}
			Ok(ProtocolMessage::Event(event)) => {
				trace!(target: "nexus.cdp", method = %event.method, "event dropped");
			}
			Err(err) => {
				warn!(target: "nexus.cdp", error = %err, "unparseable message");
			}
		}
	}

	debug!(target: "nexus.cdp", "dispatch loop ended");
	let pending = callbacks.lock().take();
	for (_, tx) in pending.into_iter().flatten() {
		let _ = tx.send(Err(Error::ConnectionClosed));
	}
}
