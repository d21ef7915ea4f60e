//! A single attached browser tab.

use nexus_protocol::{EvaluateParams, EvaluateResult, RUNTIME_EVALUATE, TargetInfo};
use serde_json::Value;

use crate::connection::Connection;
use crate::discovery::{Endpoint, discover_page};
use crate::error::{Error, Result};

/// Tab the watcher drives, addressed through its own DevTools socket.
pub struct Page {
	target: TargetInfo,
	connection: Connection,
}

impl Page {
	/// Discovers the tab matching `pattern` on `endpoint` and attaches to it.
	pub async fn attach(endpoint: &Endpoint, pattern: &str) -> Result<Self> {
		let target = discover_page(endpoint, pattern).await?;
		Self::attach_target(target).await
	}

	/// Attaches to an already-discovered target.
	pub async fn attach_target(target: TargetInfo) -> Result<Self> {
		let ws_url = target
			.web_socket_debugger_url
			.clone()
			.ok_or_else(|| Error::TargetBusy { id: target.id.clone() })?;
		let connection = Connection::connect(&ws_url).await?;
		Ok(Self { target, connection })
	}

	pub fn target(&self) -> &TargetInfo {
		&self.target
	}

	pub fn url(&self) -> &str {
		&self.target.url
	}

	/// Evaluates `expression` and returns its JSON value (`null` for `undefined`).
	pub async fn evaluate_value(&self, expression: &str) -> Result<Value> {
		self.evaluate(EvaluateParams::by_value(expression)).await
	}

	/// Evaluates `expression` as if triggered by a user gesture.
	pub async fn evaluate_with_gesture(&self, expression: &str) -> Result<Value> {
		self.evaluate(EvaluateParams::by_value(expression).with_user_gesture()).await
	}

	async fn evaluate(&self, params: EvaluateParams) -> Result<Value> {
		let raw = self.connection.send(RUNTIME_EVALUATE, serde_json::to_value(&params)?).await?;
		let result: EvaluateResult = serde_json::from_value(raw)?;

		if let Some(details) = result.exception_details {
			return Err(Error::Evaluation(details.message().to_string()));
		}

		Ok(result.result.value.unwrap_or(Value::Null))
	}

	pub async fn close(&self) -> Result<()> {
		self.connection.close().await
	}
}
