//! Scripted in-memory scheduler page for watch-loop tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use nexus_watch::probe::LOCATION_CLOSED_MARKER;
use nexus_watch::{
	CalendarCell, CancellationToken, Error, Location, Notifier, Result, SchedulingActions, SchedulingService, WatchConfig,
	Watcher,
};
use tokio::time::Instant;

/// What the panel shows for one probe.
#[derive(Debug, Clone)]
pub enum Step {
	Unavailable,
	Available(&'static str),
	Closed,
	SummaryMissing,
	ReadFails,
	OpenFails,
	LoadsForever,
}

pub struct FakeScheduler {
	script: Mutex<VecDeque<Step>>,
	current: Mutex<Option<Step>>,
	loading_polls: u32,
	loading_left: AtomicU32,
	loading_checks: AtomicU32,
	summary_reads: AtomicU32,
	calls: Mutex<Vec<String>>,
	cancel_at: Option<(u32, CancellationToken)>,
	fail_select: bool,
}

impl FakeScheduler {
	pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
		Self {
			script: Mutex::new(steps.into_iter().collect()),
			current: Mutex::new(None),
			loading_polls: 0,
			loading_left: AtomicU32::new(0),
			loading_checks: AtomicU32::new(0),
			summary_reads: AtomicU32::new(0),
			calls: Mutex::new(Vec::new()),
			cancel_at: None,
			fail_select: false,
		}
	}

	/// Shows the loading mask for `polls` checks after each open.
	pub fn with_loading_polls(mut self, polls: u32) -> Self {
		self.loading_polls = polls;
		self
	}

	/// Cancels `token` while the `read`-th summary is being read.
	pub fn cancel_during_read(mut self, read: u32, token: CancellationToken) -> Self {
		self.cancel_at = Some((read, token));
		self
	}

	pub fn failing_select(mut self) -> Self {
		self.fail_select = true;
		self
	}

	pub fn summary_reads(&self) -> u32 {
		self.summary_reads.load(Ordering::SeqCst)
	}

	pub fn loading_checks(&self) -> u32 {
		self.loading_checks.load(Ordering::SeqCst)
	}

	pub fn remaining_steps(&self) -> usize {
		self.script.lock().unwrap().len()
	}

	pub fn calls(&self) -> Vec<String> {
		self.calls.lock().unwrap().clone()
	}

	pub fn count_calls(&self, prefix: &str) -> usize {
		self.calls().iter().filter(|c| c.starts_with(prefix)).count()
	}

	fn record(&self, call: String) {
		self.calls.lock().unwrap().push(call);
	}

	fn current(&self) -> Step {
		self.current.lock().unwrap().clone().expect("probe before any panel was opened")
	}
}

#[async_trait]
impl SchedulingService for FakeScheduler {
	async fn is_loading(&self) -> Result<bool> {
		self.loading_checks.fetch_add(1, Ordering::SeqCst);
		if matches!(self.current.lock().unwrap().as_ref(), Some(Step::LoadsForever)) {
			return Ok(true);
		}
		let left = self.loading_left.load(Ordering::SeqCst);
		if left > 0 {
			self.loading_left.store(left - 1, Ordering::SeqCst);
			return Ok(true);
		}
		Ok(false)
	}

	async fn read_availability_summary(&self) -> Result<Option<String>> {
		let read = self.summary_reads.fetch_add(1, Ordering::SeqCst) + 1;
		if let Some((at, token)) = &self.cancel_at {
			if *at == read {
				token.cancel();
			}
		}

		match self.current() {
			Step::Unavailable => Ok(Some("<span>Appointments full thru 06/30/2024</span>".into())),
			Step::Available(_) => Ok(Some("<span>Next Available Appointment</span>".into())),
			Step::Closed => Ok(Some(format!("<span>{LOCATION_CLOSED_MARKER}</span>"))),
			Step::SummaryMissing => Ok(None),
			Step::ReadFails => Err(Error::Interface("stale element reference".into())),
			Step::OpenFails | Step::LoadsForever => unreachable!("summary read after failed open"),
		}
	}

	async fn read_next_appointment_date(&self) -> Result<Option<String>> {
		match self.current() {
			Step::Available(date) => Ok(Some(date.to_string())),
			_ => Ok(None),
		}
	}
}

#[async_trait]
impl SchedulingActions for FakeScheduler {
	async fn open_location_panel(&self, location: Location) -> Result<()> {
		self.record(format!("open {}", location.center_id()));
		let step = self
			.script
			.lock()
			.unwrap()
			.pop_front()
			.expect("watch probed past the end of its script");
		let fails = matches!(step, Step::OpenFails);
		*self.current.lock().unwrap() = Some(step);
		self.loading_left.store(self.loading_polls, Ordering::SeqCst);
		if fails {
			return Err(Error::Interface(format!("element #centerDetails{} not found", location.center_id())));
		}
		Ok(())
	}

	async fn close_location_panel(&self, location: Location) -> Result<()> {
		self.record(format!("close {}", location.center_id()));
		Ok(())
	}

	async fn choose_location(&self, location: Location) -> Result<()> {
		self.record(format!("choose {}", location.center_id()));
		self.loading_left.store(self.loading_polls, Ordering::SeqCst);
		Ok(())
	}

	async fn select_calendar_cell(&self, cell: &CalendarCell) -> Result<()> {
		self.record(format!("select {}", cell.element_id()));
		if self.fail_select {
			return Err(Error::Interface("calendar cell not found".into()));
		}
		Ok(())
	}

	async fn confirm_selected_date(&self) -> Result<()> {
		self.record("confirm".to_string());
		Ok(())
	}
}

/// Records when each pulse fired.
#[derive(Default)]
pub struct RecordingNotifier {
	pulses: Mutex<Vec<Instant>>,
}

impl RecordingNotifier {
	pub fn pulses(&self) -> Vec<Instant> {
		self.pulses.lock().unwrap().clone()
	}
}

#[async_trait]
impl Notifier for RecordingNotifier {
	async fn pulse(&self) -> Result<()> {
		self.pulses.lock().unwrap().push(Instant::now());
		Ok(())
	}
}

pub fn watcher(page: &Arc<FakeScheduler>, notifier: &Arc<RecordingNotifier>) -> Watcher<FakeScheduler, FakeScheduler> {
	watcher_with(page, notifier, WatchConfig::default())
}

pub fn watcher_with(
	page: &Arc<FakeScheduler>,
	notifier: &Arc<RecordingNotifier>,
	config: WatchConfig,
) -> Watcher<FakeScheduler, FakeScheduler> {
	Watcher::new(Arc::clone(page), Arc::clone(page), notifier.clone(), config)
}
