//! Watch loop and retry controller.
//!
//! One cycle opens the location panel, probes it and reacts:
//!
//! | probe              | reaction                                                     |
//! |--------------------|--------------------------------------------------------------|
//! | `Available`        | hand off once (advance the calendar, alert), then stop       |
//! | `Unavailable`      | reset the error streak, pause, close the panel, next cycle   |
//! | `LocationClosed`   | stop; never retried and never counted as an error            |
//! | `TransientError`   | count it; retry right away until the budget is spent         |
//!
//! Cancellation is cooperative: the token is checked between cycles, never in
//! the middle of a probe.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::alert::{AlertSchedule, emit_alert};
use crate::calendar::CalendarCell;
use crate::config::WatchConfig;
use crate::error::Result;
use crate::location::Location;
use crate::probe::{ProbeResult, Prober};
use crate::scheduler::{Notifier, SchedulingActions, SchedulingService};
use crate::session::WatchSession;

/// Why a watch stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
	/// Slot found and the calendar advanced to it.
	Found { date: NaiveDate, cell: CalendarCell },
	/// Slot found but the calendar could not be advanced.
	HandoffFailed { date: NaiveDate, cell: CalendarCell, reason: String },
	/// The location does not take appointments at all.
	Closed,
	ErrorBudgetExhausted { attempts: u32, last_error: String },
	Cancelled,
}

impl Termination {
	/// Whether an appointment was detected, regardless of handoff success.
	pub fn found_appointment(&self) -> bool {
		matches!(self, Termination::Found { .. } | Termination::HandoffFailed { .. })
	}
}

impl fmt::Display for Termination {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Termination::Found { date, .. } => write!(
				f,
				"Appointment available on {}. The calendar is on that date; confirm the booking in the browser now.",
				date.format("%A, %B %-d, %Y")
			),
			Termination::HandoffFailed { date, reason, .. } => write!(
				f,
				"Appointment available on {}, but the calendar could not be advanced ({reason}). Book it manually now.",
				date.format("%A, %B %-d, %Y")
			),
			Termination::Closed => f.write_str("This location is not accepting appointments, please choose another one."),
			Termination::ErrorBudgetExhausted { attempts, last_error } => {
				write!(f, "Errored {attempts} times in a row (last: {last_error}). Stopped watching.")
			}
			Termination::Cancelled => f.write_str("Watching stopped."),
		}
	}
}

/// Result of a completed watch.
#[derive(Debug)]
pub struct WatchReport {
	pub termination: Termination,
	/// Probes performed, including failed ones.
	pub probes: u32,
	/// Alert task spawned by the handoff; keep the runtime alive until it ends.
	pub alert: Option<JoinHandle<()>>,
}

/// Drives probes for one location until a terminal state.
pub struct Watcher<S: ?Sized, A: ?Sized> {
	prober: Prober<S>,
	actions: Arc<A>,
	notifier: Arc<dyn Notifier>,
	config: WatchConfig,
}

impl<S, A> Watcher<S, A>
where
	S: SchedulingService + ?Sized,
	A: SchedulingActions + ?Sized,
{
	pub fn new(service: Arc<S>, actions: Arc<A>, notifier: Arc<dyn Notifier>, config: WatchConfig) -> Self {
		Self {
			prober: Prober::new(service, &config),
			actions,
			notifier,
			config,
		}
	}

	/// Watches `location` with a fresh session.
	pub async fn watch(&self, location: Location, cancel: &CancellationToken) -> WatchReport {
		let mut session = WatchSession::new(location);
		self.run(&mut session, cancel).await
	}

	/// Runs the loop on a caller-owned session until it terminates.
	pub async fn run(&self, session: &mut WatchSession, cancel: &CancellationToken) -> WatchReport {
		let location = session.location();
		let budget = self.config.error_budget();
		let mut probes = 0u32;
		let mut alert = None;

		info!(target: "nexus.watch", %location, budget, "watch started");

		let termination = loop {
			if cancel.is_cancelled() {
				session.deactivate();
			}
			if !session.is_active() {
				break Termination::Cancelled;
			}

			probes += 1;
			let result = match self.actions.open_location_panel(location).await {
				Ok(()) => self
					.prober
					.probe()
					.await
					.unwrap_or_else(|err| ProbeResult::TransientError(err.to_string())),
				Err(err) => ProbeResult::TransientError(format!("could not open location panel: {err}")),
			};

			match result {
				ProbeResult::Available(date) => {
					let (termination, task) = self.hand_off(session, date).await;
					alert = task;
					break termination;
				}
				ProbeResult::Unavailable => {
					session.record_success();
					debug!(target: "nexus.watch", %location, probe = probes, "no appointments yet");

					if cancel.is_cancelled() {
						session.deactivate();
					}
					if !session.is_active() {
						break Termination::Cancelled;
					}

					tokio::time::sleep(self.config.inter_probe_delay()).await;
					if let Err(err) = self.actions.close_location_panel(location).await {
						warn!(target: "nexus.watch", %location, error = %err, "could not close location panel");
					}
				}
				ProbeResult::LocationClosed => {
					session.deactivate();
					break Termination::Closed;
				}
				ProbeResult::TransientError(cause) => {
					let attempts = session.record_transient_error();
					if attempts < budget {
						warn!(target: "nexus.watch", %location, attempts, budget, error = %cause, "probe failed, retrying");
						continue;
					}
					session.deactivate();
					break Termination::ErrorBudgetExhausted {
						attempts,
						last_error: cause,
					};
				}
			}
		};

		session.mark_terminated();
		report(location, probes, &termination);

		WatchReport {
			termination,
			probes,
			alert,
		}
	}

	/// One-shot handoff: claim the session, start the alert, advance the calendar.
	async fn hand_off(&self, session: &mut WatchSession, date: NaiveDate) -> (Termination, Option<JoinHandle<()>>) {
		if !session.begin_handoff() {
			return (Termination::Cancelled, None);
		}

		let location = session.location();
		let cell = CalendarCell::for_date(date, self.config.week_start);
		info!(target: "nexus.watch", %location, %date, %cell, "appointment available");

		let alert = emit_alert(Arc::clone(&self.notifier), AlertSchedule::from_config(&self.config));

		let termination = match self.advance(location, &cell).await {
			Ok(()) => Termination::Found { date, cell },
			Err(err) => Termination::HandoffFailed {
				date,
				cell,
				reason: err.to_string(),
			},
		};
		(termination, Some(alert))
	}

	async fn advance(&self, location: Location, cell: &CalendarCell) -> Result<()> {
		self.actions.choose_location(location).await?;
		self.prober.wait_until_idle().await?;
		self.actions.select_calendar_cell(cell).await?;
		self.actions.confirm_selected_date().await
	}
}

/// Records the outcome for diagnostics. Presenting it to the operator is
/// left to the caller, so nothing here logs above `info`.
fn report(location: Location, probes: u32, termination: &Termination) {
	info!(target: "nexus.watch", %location, probes, found = termination.found_appointment(), "watch ended: {termination}");
}
