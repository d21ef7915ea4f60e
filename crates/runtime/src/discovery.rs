//! DevTools endpoint probing and tab discovery.

use std::fmt;
use std::time::Duration;

use nexus_protocol::{TargetInfo, VersionInfo};
use tracing::debug;

use crate::error::{Error, Result};

const PROBE_TIMEOUT: Duration = Duration::from_millis(400);

/// Host and port of a browser's remote-debugging HTTP endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
	pub host: String,
	pub port: u16,
}

impl Endpoint {
	pub fn new(host: impl Into<String>, port: u16) -> Self {
		Self { host: host.into(), port }
	}

	fn url(&self, path: &str) -> String {
		format!("http://{}:{}{}", self.host, self.port, path)
	}
}

impl Default for Endpoint {
	fn default() -> Self {
		Self::new("127.0.0.1", 9222)
	}
}

impl fmt::Display for Endpoint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.host, self.port)
	}
}

fn client() -> Result<reqwest::Client> {
	Ok(reqwest::Client::builder().timeout(PROBE_TIMEOUT).build()?)
}

async fn get_json<T: serde::de::DeserializeOwned>(endpoint: &Endpoint, path: &str) -> Result<T> {
	let url = endpoint.url(path);
	let response = client()?.get(&url).send().await.map_err(|e| Error::EndpointUnreachable {
		endpoint: endpoint.to_string(),
		reason: e.to_string(),
	})?;

	if !response.status().is_success() {
		return Err(Error::EndpointUnreachable {
			endpoint: endpoint.to_string(),
			reason: format!("unexpected status {} from {}", response.status(), path),
		});
	}

	Ok(response.json().await?)
}

/// Resolves browser version metadata from `/json/version`.
pub async fn fetch_version(endpoint: &Endpoint) -> Result<VersionInfo> {
	get_json(endpoint, "/json/version").await
}

/// Lists every target the browser exposes via `/json/list`.
pub async fn list_targets(endpoint: &Endpoint) -> Result<Vec<TargetInfo>> {
	get_json(endpoint, "/json/list").await
}

/// Finds the first page target whose URL contains `pattern`.
pub async fn discover_page(endpoint: &Endpoint, pattern: &str) -> Result<TargetInfo> {
	let targets = list_targets(endpoint).await?;
	select_page(targets, pattern)
}

fn select_page(targets: Vec<TargetInfo>, pattern: &str) -> Result<TargetInfo> {
	let pattern_lower = pattern.to_lowercase();
	let pages: Vec<TargetInfo> = targets.into_iter().filter(TargetInfo::is_page).collect();
	let seen = pages.len();

	let target = pages
		.into_iter()
		.find(|t| t.url.to_lowercase().contains(&pattern_lower))
		.ok_or_else(|| Error::NoMatchingTarget {
			pattern: pattern.to_string(),
			seen,
		})?;

	if target.web_socket_debugger_url.is_none() {
		return Err(Error::TargetBusy { id: target.id });
	}

	debug!(target: "nexus.cdp", id = %target.id, url = %target.url, "selected page target");
	Ok(target)
}
