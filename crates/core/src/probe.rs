//! Availability Prober: one classified availability check.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::calendar::parse_appointment_date;
use crate::config::WatchConfig;
use crate::error::{Error, Result};
use crate::scheduler::SchedulingService;

/// Summary text of a location that never takes appointments.
pub const LOCATION_CLOSED_MARKER: &str = "Appointments not available for this location";
/// Summary text of a location whose current slot pool is exhausted.
pub const FULLY_BOOKED_MARKER: &str = "Appointments full thru";

pub const SUMMARY_MISSING: &str = "appointment summary did not load";

/// Outcome of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
	Available(NaiveDate),
	Unavailable,
	LocationClosed,
	TransientError(String),
}

/// Classifies the availability summary of the open panel.
pub struct Prober<S: ?Sized> {
	service: Arc<S>,
	poll_interval: Duration,
	timeout: Duration,
}

impl<S: SchedulingService + ?Sized> Prober<S> {
	pub fn new(service: Arc<S>, config: &WatchConfig) -> Self {
		Self {
			service,
			poll_interval: config.loading_poll(),
			timeout: config.loading_timeout(),
		}
	}

	/// Waits out the loading state, then classifies the summary.
	///
	/// Errors from the page surface as `Err`; the watch loop folds them into
	/// [`ProbeResult::TransientError`].
	pub async fn probe(&self) -> Result<ProbeResult> {
		self.wait_until_idle().await?;

		let Some(summary) = self.service.read_availability_summary().await? else {
			return Ok(ProbeResult::TransientError(SUMMARY_MISSING.to_string()));
		};
		trace!(target: "nexus.watch", %summary, "availability summary");

		if summary.contains(LOCATION_CLOSED_MARKER) {
			return Ok(ProbeResult::LocationClosed);
		}
		if summary.contains(FULLY_BOOKED_MARKER) {
			return Ok(ProbeResult::Unavailable);
		}

		let text = self
			.service
			.read_next_appointment_date()
			.await?
			.ok_or_else(|| Error::Interface("next appointment date is not shown".into()))?;
		Ok(ProbeResult::Available(parse_appointment_date(&text)?))
	}

	/// Polls the loading indicator until it clears, yielding between checks.
	pub async fn wait_until_idle(&self) -> Result<()> {
		let wait = async {
			let mut polls = 0u32;
			while self.service.is_loading().await? {
				polls += 1;
				tokio::time::sleep(self.poll_interval).await;
			}
			if polls > 0 {
				debug!(target: "nexus.watch", polls, "loading finished");
			}
			Ok::<(), Error>(())
		};

		tokio::time::timeout(self.timeout, wait)
			.await
			.map_err(|_| Error::LoadingTimeout(self.timeout))?
	}
}
