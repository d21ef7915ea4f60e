//! Fire-and-forget alert pulses.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::WatchConfig;
use crate::error::{Error, Result};
use crate::scheduler::Notifier;

/// How many pulses to emit and how far apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertSchedule {
	pub pulses: u32,
	pub spacing: Duration,
}

impl AlertSchedule {
	pub fn from_config(config: &WatchConfig) -> Self {
		Self {
			pulses: config.alert_pulses,
			spacing: config.alert_spacing(),
		}
	}
}

/// Spawns a detached task emitting `schedule.pulses` pulses `schedule.spacing` apart.
///
/// Returns immediately. Pulse failures are logged and do not stop the sequence.
/// Dropping the handle leaves the task running.
pub fn emit_alert(notifier: Arc<dyn Notifier>, schedule: AlertSchedule) -> JoinHandle<()> {
	tokio::spawn(async move {
		for n in 0..schedule.pulses {
			if n > 0 {
				tokio::time::sleep(schedule.spacing).await;
			}
			match notifier.pulse().await {
				Ok(()) => debug!(target: "nexus.watch", pulse = n + 1, of = schedule.pulses, "alert pulse"),
				Err(err) => warn!(target: "nexus.watch", pulse = n + 1, error = %err, "alert pulse failed"),
			}
		}
	})
}

/// Rings the terminal bell on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellNotifier;

#[async_trait]
impl Notifier for BellNotifier {
	async fn pulse(&self) -> Result<()> {
		let mut stderr = std::io::stderr();
		stderr
			.write_all(b"\x07")
			.and_then(|()| stderr.flush())
			.map_err(|e| Error::Interface(format!("terminal bell: {e}")))
	}
}
