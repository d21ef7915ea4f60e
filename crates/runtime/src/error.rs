use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("DevTools HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("No DevTools endpoint on {endpoint}: {reason}")]
	EndpointUnreachable { endpoint: String, reason: String },

	#[error("No open tab matches '{pattern}' ({seen} page targets inspected)")]
	NoMatchingTarget { pattern: String, seen: usize },

	#[error("Target {id} is already attached to another DevTools client")]
	TargetBusy { id: String },

	#[error("WebSocket error: {0}")]
	WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Protocol error {code}: {message}")]
	Protocol { code: i64, message: String },

	#[error("Evaluation failed: {0}")]
	Evaluation(String),

	#[error("No reply to {method} within {after:?}")]
	Timeout { method: String, after: std::time::Duration },

	#[error("Connection closed")]
	ConnectionClosed,
}
