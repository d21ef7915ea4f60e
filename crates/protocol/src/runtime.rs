//! `Runtime` domain types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const RUNTIME_EVALUATE: &str = "Runtime.evaluate";

/// Parameters for `Runtime.evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateParams {
	pub expression: String,
	#[serde(default)]
	pub return_by_value: bool,
	#[serde(default)]
	pub await_promise: bool,
	/// Treat the evaluation as a user gesture (needed for audio autoplay).
	#[serde(default)]
	pub user_gesture: bool,
}

impl EvaluateParams {
	/// Evaluation returning a JSON value and awaiting promises.
	pub fn by_value(expression: impl Into<String>) -> Self {
		Self {
			expression: expression.into(),
			return_by_value: true,
			await_promise: true,
			user_gesture: false,
		}
	}

	pub fn with_user_gesture(mut self) -> Self {
		self.user_gesture = true;
		self
	}
}

/// Mirror of a JavaScript value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteObject {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub subtype: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub value: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// Details of an exception thrown during evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionDetails {
	pub text: String,
	#[serde(default)]
	pub line_number: i64,
	#[serde(default)]
	pub column_number: i64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub exception: Option<RemoteObject>,
}

impl ExceptionDetails {
	/// Best human-readable message: the thrown object's description, else `text`.
	pub fn message(&self) -> &str {
		self.exception
			.as_ref()
			.and_then(|e| e.description.as_deref())
			.unwrap_or(&self.text)
	}
}

/// Result of `Runtime.evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateResult {
	pub result: RemoteObject,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub exception_details: Option<ExceptionDetails>,
}
