//! JSON-RPC envelope types carried over the DevTools WebSocket.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Command sent to the browser.
///
/// ```json
/// { "id": 7, "method": "Runtime.evaluate", "params": { "expression": "1 + 1" } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
	/// Sequential id used to correlate the response.
	pub id: u32,
	/// Domain-qualified method name.
	pub method: String,
	/// Method parameters as a JSON object.
	#[serde(default)]
	pub params: Value,
}

/// Response to a [`Request`], correlated by `id`.
///
/// `result` and `error` are mutually exclusive on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
	pub id: u32,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<ProtocolError>,
}

/// Error payload of a failed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolError {
	pub code: i64,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<String>,
}

/// Unsolicited notification (no `id`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
	pub method: String,
	#[serde(default)]
	pub params: Value,
}

/// Any inbound message.
///
/// Untagged: messages with an `id` are responses, everything else is an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
	Response(Response),
	Event(Event),
}
