//! Config file and command-line overrides.
//!
//! The file is optional JSON; every field falls back to its default, so a
//! file holding only `{"cdpPort": 9333}` is valid. Flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use nexus_runtime::Endpoint;
use nexus_watch::WatchConfig;
use nexus_watch::browser::DEFAULT_TONE_URL;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{AlertMode, DevtoolsArgs, WatchArgs};
use crate::error::Result;

pub const DEFAULT_TARGET_URL_PATTERN: &str = "ttp.cbp.dhs.gov";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CliConfig {
	pub cdp_host: String,
	pub cdp_port: u16,
	pub target_url_pattern: String,
	pub alert: AlertMode,
	pub alert_sound_url: String,
	#[serde(flatten)]
	pub watch: WatchConfig,
}

impl Default for CliConfig {
	fn default() -> Self {
		let endpoint = Endpoint::default();
		Self {
			cdp_host: endpoint.host,
			cdp_port: endpoint.port,
			target_url_pattern: DEFAULT_TARGET_URL_PATTERN.to_string(),
			alert: AlertMode::default(),
			alert_sound_url: DEFAULT_TONE_URL.to_string(),
			watch: WatchConfig::default(),
		}
	}
}

/// `<config dir>/nexus-watch/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("nexus-watch").join("config.json"))
}

impl CliConfig {
	/// Loads `explicit` (which must exist) or the default path (which may not).
	pub fn load(explicit: Option<&Path>) -> Result<Self> {
		match explicit {
			Some(path) => Self::read(path),
			None => match default_config_path() {
				Some(path) if path.exists() => Self::read(&path),
				_ => Ok(Self::default()),
			},
		}
	}

	fn read(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
		let config =
			serde_json::from_str(&content).with_context(|| format!("parsing config {}", path.display()))?;
		debug!(target: "nexus", path = %path.display(), "config loaded");
		Ok(config)
	}

	pub fn endpoint(&self) -> Endpoint {
		Endpoint::new(self.cdp_host.clone(), self.cdp_port)
	}

	pub fn apply_devtools(&mut self, args: &DevtoolsArgs) {
		if let Some(host) = &args.cdp_host {
			self.cdp_host = host.clone();
		}
		if let Some(port) = args.cdp_port {
			self.cdp_port = port;
		}
		if let Some(pattern) = &args.target_url {
			self.target_url_pattern = pattern.clone();
		}
	}

	pub fn apply_watch(&mut self, args: &WatchArgs) {
		if let Some(alert) = args.alert {
			self.alert = alert;
		}
		if let Some(url) = &args.tone_url {
			self.alert_sound_url = url.clone();
		}
		if let Some(n) = args.max_errors {
			self.watch.max_consecutive_errors = n;
		}
		if let Some(ms) = args.interval_ms {
			self.watch.inter_probe_delay_ms = ms;
		}
		if let Some(ms) = args.loading_timeout_ms {
			self.watch.loading_timeout_ms = ms;
		}
	}
}

#[cfg(test)]
mod tests {
	use nexus_watch::{Location, WeekStart};
	use tempfile::TempDir;

	use super::*;
	use crate::error::CliError;

	#[test]
	fn missing_fields_take_defaults() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("config.json");
		fs::write(&path, r#"{"cdpPort": 9333, "maxConsecutiveErrors": 4, "weekStart": "monday"}"#).unwrap();

		let config = CliConfig::load(Some(&path)).unwrap();
		assert_eq!(config.cdp_port, 9333);
		assert_eq!(config.cdp_host, "127.0.0.1");
		assert_eq!(config.target_url_pattern, DEFAULT_TARGET_URL_PATTERN);
		assert_eq!(config.watch.max_consecutive_errors, 4);
		assert_eq!(config.watch.week_start, WeekStart::Monday);
		assert_eq!(config.watch.inter_probe_delay_ms, 1000);
	}

	#[test]
	fn explicit_missing_file_is_an_error() {
		let tmp = TempDir::new().unwrap();
		let err = CliConfig::load(Some(&tmp.path().join("absent.json"))).unwrap_err();
		assert!(matches!(err, CliError::Anyhow(_)));
		assert!(err.to_string().contains("reading config"));
	}

	#[test]
	fn malformed_file_is_an_error() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("config.json");
		fs::write(&path, "{ not json").unwrap();
		let err = CliConfig::load(Some(&path)).unwrap_err();
		assert!(err.to_string().contains("parsing config"));
	}

	#[test]
	fn flags_override_file() {
		let mut config = CliConfig::default();
		config.apply_devtools(&DevtoolsArgs {
			cdp_host: Some("10.0.0.2".into()),
			cdp_port: None,
			target_url: Some("localhost:4200".into()),
		});
		config.apply_watch(&WatchArgs {
			location: Location::Blaine,
			alert: Some(AlertMode::Bell),
			tone_url: None,
			max_errors: Some(7),
			interval_ms: Some(5000),
			loading_timeout_ms: None,
		});

		assert_eq!(config.endpoint(), Endpoint::new("10.0.0.2", 9222));
		assert_eq!(config.target_url_pattern, "localhost:4200");
		assert_eq!(config.alert, AlertMode::Bell);
		assert_eq!(config.alert_sound_url, DEFAULT_TONE_URL);
		assert_eq!(config.watch.max_consecutive_errors, 7);
		assert_eq!(config.watch.inter_probe_delay_ms, 5000);
		assert_eq!(config.watch.loading_timeout_ms, 60_000);
	}

	#[test]
	fn serialized_defaults_are_flat_camel_case() {
		let value = serde_json::to_value(CliConfig::default()).unwrap();
		assert_eq!(value["cdpPort"], 9222);
		assert_eq!(value["alert"], "browser");
		assert_eq!(value["interProbeDelayMs"], 1000);
		assert_eq!(value["weekStart"], "sunday");
	}
}
