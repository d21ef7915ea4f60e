//! Watch policy knobs.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::calendar::WeekStart;

pub const DEFAULT_LOADING_POLL_MS: u64 = 100;
pub const DEFAULT_LOADING_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_INTER_PROBE_DELAY_MS: u64 = 1_000;
pub const DEFAULT_MAX_CONSECUTIVE_ERRORS: u32 = 3;
pub const DEFAULT_ALERT_PULSES: u32 = 5;
pub const DEFAULT_ALERT_SPACING_MS: u64 = 1_000;

/// Timing and retry policy for one watch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WatchConfig {
	/// Interval between loading-indicator checks.
	pub loading_poll_ms: u64,
	/// Upper bound on one loading wait before the probe counts as failed.
	pub loading_timeout_ms: u64,
	/// Pause after an "unavailable" probe before the panel is reopened.
	pub inter_probe_delay_ms: u64,
	/// Consecutive transient failures tolerated before giving up.
	pub max_consecutive_errors: u32,
	pub alert_pulses: u32,
	pub alert_spacing_ms: u64,
	pub week_start: WeekStart,
}

impl Default for WatchConfig {
	fn default() -> Self {
		Self {
			loading_poll_ms: DEFAULT_LOADING_POLL_MS,
			loading_timeout_ms: DEFAULT_LOADING_TIMEOUT_MS,
			inter_probe_delay_ms: DEFAULT_INTER_PROBE_DELAY_MS,
			max_consecutive_errors: DEFAULT_MAX_CONSECUTIVE_ERRORS,
			alert_pulses: DEFAULT_ALERT_PULSES,
			alert_spacing_ms: DEFAULT_ALERT_SPACING_MS,
			week_start: WeekStart::default(),
		}
	}
}

impl WatchConfig {
	pub fn loading_poll(&self) -> Duration {
		Duration::from_millis(self.loading_poll_ms)
	}

	pub fn loading_timeout(&self) -> Duration {
		Duration::from_millis(self.loading_timeout_ms)
	}

	pub fn inter_probe_delay(&self) -> Duration {
		Duration::from_millis(self.inter_probe_delay_ms)
	}

	pub fn alert_spacing(&self) -> Duration {
		Duration::from_millis(self.alert_spacing_ms)
	}

	/// Ceiling clamped to at least one attempt.
	pub fn error_budget(&self) -> u32 {
		self.max_consecutive_errors.max(1)
	}
}
